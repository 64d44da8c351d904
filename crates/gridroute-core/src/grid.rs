//! The [`Grid`] type: a fixed-size 2D store of [`Terrain`] values.
//!
//! Unlike a shared-buffer view, a `Grid` owns its cells outright. Cloning it
//! yields an independent snapshot, which is what a caller hands to a search
//! running elsewhere.

use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::terrain::Terrain;

/// A W×H grid of terrain cells stored row-major.
///
/// Dimensions are fixed at construction. Cells change only through
/// [`set`](Grid::set), [`fill`](Grid::fill) and [`clear`](Grid::clear).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr", into = "GridRepr")
)]
pub struct Grid {
    cells: Vec<Terrain>,
    bounds: Range,
}

/// Largest number of cells a grid may hold.
pub const MAX_CELLS: usize = 1 << 24;

impl Grid {
    /// Create a new grid with every cell [`Terrain::Open`].
    ///
    /// Fails unless both dimensions are positive and the area is at most
    /// [`MAX_CELLS`].
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        let area = usize::try_from(width)
            .ok()
            .zip(usize::try_from(height).ok())
            .and_then(|(w, h)| w.checked_mul(h));
        match area {
            Some(n) if n > 0 && n <= MAX_CELLS => Ok(Self::open(width, height)),
            _ => Err(GridError::InvalidDimension { width, height }),
        }
    }

    /// All-open grid; dimensions already validated.
    fn open(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width, height);
        Self {
            cells: vec![Terrain::Open; bounds.len()],
            bounds,
        }
    }

    /// The bounding range `[0, W) × [0, H)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size as a `Point` (x = width, y = height).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width() as usize + p.x as usize)
    }

    /// Read the terrain at `p`.
    pub fn get(&self, p: Point) -> Result<Terrain, GridError> {
        self.at(p).ok_or(GridError::OutOfBounds(p))
    }

    /// Read the terrain at `p`, or `None` if `p` is outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Terrain> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Overwrite the terrain at `p`.
    pub fn set(&mut self, p: Point, terrain: Terrain) -> Result<(), GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds(p))?;
        self.cells[i] = terrain;
        Ok(())
    }

    /// Whether a route may step onto `p`: inside the grid and not an obstacle.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Terrain::is_passable)
    }

    /// The in-bounds orthogonal neighbours of `p`, in the order up, right,
    /// down, left.
    ///
    /// Passability is not checked here.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4()
            .into_iter()
            .filter(move |&n| self.bounds.contains(n))
    }

    /// Fill every cell with `terrain`.
    pub fn fill(&mut self, terrain: Terrain) {
        self.cells.fill(terrain);
    }

    /// Reset every cell to [`Terrain::Open`].
    pub fn clear(&mut self) {
        self.fill(Terrain::Open);
    }

    /// Count how many cells hold `terrain`.
    pub fn count(&self, terrain: Terrain) -> usize {
        self.cells.iter().filter(|&&t| t == terrain).count()
    }

    /// Row-major iterator over `(Point, Terrain)` pairs.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Point, Terrain)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// The cells of row `y`, left to right, or `None` if `y` is outside.
    pub fn row(&self, y: i32) -> Option<&[Terrain]> {
        if y < 0 || y >= self.height() {
            return None;
        }
        let w = self.width() as usize;
        let start = y as usize * w;
        Some(&self.cells[start..start + w])
    }
}

impl Default for Grid {
    /// A [`DEFAULT_WIDTH`](crate::DEFAULT_WIDTH) × [`DEFAULT_HEIGHT`](crate::DEFAULT_HEIGHT)
    /// all-open grid.
    fn default() -> Self {
        Self::open(crate::DEFAULT_WIDTH, crate::DEFAULT_HEIGHT)
    }
}

// ---------------------------------------------------------------------------
// Serde representation
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    cells: Vec<Terrain>,
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(g: Grid) -> Self {
        Self {
            width: g.width(),
            height: g.height(),
            cells: g.cells,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(r: GridRepr) -> Result<Self, GridError> {
        let mut g = Grid::new(r.width, r.height)?;
        if r.cells.len() != g.cells.len() {
            return Err(GridError::InvalidDimension {
                width: r.width,
                height: r.height,
            });
        }
        g.cells = r.cells;
        Ok(g)
    }
}

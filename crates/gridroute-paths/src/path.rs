use gridroute_core::Point;

/// A route from start to goal, both included, in travel order.
///
/// A path is never empty: it holds at least its start.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PathRepr", into = "PathRepr")
)]
pub struct Path {
    points: Vec<Point>,
    weighted_cost: u64,
}

impl Path {
    pub(crate) fn new(points: Vec<Point>, weighted_cost: u64) -> Self {
        debug_assert!(!points.is_empty());
        Self {
            points,
            weighted_cost,
        }
    }

    /// The coordinates of the route.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// First coordinate.
    #[inline]
    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Last coordinate.
    #[inline]
    pub fn goal(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Number of coordinates, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a path holds at least its start.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Reported path cost: the number of steps taken (`len() - 1`).
    #[inline]
    pub fn cost(&self) -> usize {
        self.points.len() - 1
    }

    /// Accumulated traversal cost including traffic and hazard penalties.
    #[inline]
    pub fn weighted_cost(&self) -> u64 {
        self.weighted_cost
    }

    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl From<Path> for Vec<Point> {
    fn from(p: Path) -> Self {
        p.points
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PathRepr {
    points: Vec<Point>,
    weighted_cost: u64,
}

#[cfg(feature = "serde")]
impl From<Path> for PathRepr {
    fn from(p: Path) -> Self {
        Self {
            points: p.points,
            weighted_cost: p.weighted_cost,
        }
    }
}

/// Rejected serialized path with no points.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
#[error("a path must contain at least one point")]
pub(crate) struct EmptyPath;

#[cfg(feature = "serde")]
impl TryFrom<PathRepr> for Path {
    type Error = EmptyPath;

    fn try_from(r: PathRepr) -> Result<Self, EmptyPath> {
        if r.points.is_empty() {
            return Err(EmptyPath);
        }
        Ok(Self::new(r.points, r.weighted_cost))
    }
}

//! The [`Session`]: everything a route-planning front end edits between
//! searches, owned in one place.

use gridroute_core::{Grid, GridError, Point, Terrain, TrafficOverlay};
use gridroute_paths::{CostConfig, Path, search_with};

use crate::config::SessionConfig;
use crate::error::{MapError, SessionError};
use crate::format::{parse_map, write_map};
use crate::report::RouteReport;

/// Terrain, traffic, endpoints and the last result of a planning session.
///
/// A front end holds one `Session` and drives it with edits and
/// [`run`](Session::run). Any edit to the grid or overlay discards the last
/// result.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    overlay: TrafficOverlay,
    cost: CostConfig,
    start: Option<Point>,
    goal: Option<Point>,
    brush: Terrain,
    placing_start: bool,
    last: Option<RouteReport>,
}

impl Session {
    /// Create a session with an all-open grid of the configured size.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let grid = Grid::new(config.width, config.height)?;
        let mut s = Self::with_grid(grid);
        s.cost = config.cost;
        Ok(s)
    }

    /// Create a session around an existing grid.
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            overlay: TrafficOverlay::new(),
            cost: CostConfig::default(),
            start: None,
            goal: None,
            brush: Terrain::RoadPreferred,
            placing_start: false,
            last: None,
        }
    }

    // -----------------------------------------------------------------------
    // State access
    // -----------------------------------------------------------------------

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the terrain. Discards the last result.
    pub fn grid_mut(&mut self) -> &mut Grid {
        self.last = None;
        &mut self.grid
    }

    #[inline]
    pub fn overlay(&self) -> &TrafficOverlay {
        &self.overlay
    }

    /// Mutable access to the traffic overlay. Discards the last result.
    pub fn overlay_mut(&mut self) -> &mut TrafficOverlay {
        self.last = None;
        &mut self.overlay
    }

    #[inline]
    pub fn cost_config(&self) -> CostConfig {
        self.cost
    }

    pub fn set_cost_config(&mut self, cost: CostConfig) {
        self.cost = cost;
        self.last = None;
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Option<Point> {
        self.goal
    }

    /// Place the start. Fails if `p` is outside the grid.
    pub fn set_start(&mut self, p: Point) -> Result<(), SessionError> {
        self.check_bounds(p)?;
        self.start = Some(p);
        self.last = None;
        Ok(())
    }

    /// Place the goal. Fails if `p` is outside the grid.
    pub fn set_goal(&mut self, p: Point) -> Result<(), SessionError> {
        self.check_bounds(p)?;
        self.goal = Some(p);
        self.last = None;
        Ok(())
    }

    fn check_bounds(&self, p: Point) -> Result<(), GridError> {
        if self.grid.contains(p) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds(p))
        }
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// The terrain [`paint`](Session::paint) writes.
    #[inline]
    pub fn brush(&self) -> Terrain {
        self.brush
    }

    pub fn set_brush(&mut self, brush: Terrain) {
        self.brush = brush;
    }

    /// Make the next [`paint`](Session::paint) place the start instead of
    /// terrain.
    pub fn begin_start_placement(&mut self) {
        self.placing_start = true;
    }

    #[inline]
    pub fn is_placing_start(&self) -> bool {
        self.placing_start
    }

    /// Apply the current tool at `p`.
    ///
    /// After [`begin_start_placement`](Session::begin_start_placement) this
    /// moves the start to `p` and leaves terrain alone. Otherwise it writes
    /// the brush terrain; painting a road also places the start if there is
    /// none, or else the goal if there is none.
    pub fn paint(&mut self, p: Point) -> Result<(), SessionError> {
        if self.placing_start {
            self.set_start(p)?;
            self.placing_start = false;
            return Ok(());
        }
        self.grid.set(p, self.brush)?;
        self.last = None;
        if self.brush == Terrain::RoadPreferred {
            if self.start.is_none() {
                self.start = Some(p);
            } else if self.goal.is_none() {
                self.goal = Some(p);
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Searching
    // -----------------------------------------------------------------------

    /// Search from start to goal and keep the result.
    pub fn run(&mut self) -> Result<&RouteReport, SessionError> {
        let start = self.start.ok_or(SessionError::MissingStart)?;
        let goal = self.goal.ok_or(SessionError::MissingGoal)?;
        let path = search_with(&self.grid, &self.overlay, &self.cost, start, goal)?;
        match &path {
            Some(p) => log::debug!("session: route {start} -> {goal} in {} steps", p.cost()),
            None => log::debug!("session: no route {start} -> {goal}"),
        }
        Ok(&*self.last.insert(RouteReport { start, goal, path }))
    }

    /// The result of the last [`run`](Session::run), unless edits discarded it.
    #[inline]
    pub fn last_report(&self) -> Option<&RouteReport> {
        self.last.as_ref()
    }

    pub fn last_path(&self) -> Option<&Path> {
        self.last.as_ref().and_then(|r| r.path.as_ref())
    }

    /// Clear terrain, traffic, endpoints and the last result. Size, brush and
    /// cost settings are kept.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.overlay.clear();
        self.start = None;
        self.goal = None;
        self.placing_start = false;
        self.last = None;
    }

    // -----------------------------------------------------------------------
    // Map exchange
    // -----------------------------------------------------------------------

    /// Replace the terrain with a parsed dump.
    ///
    /// The grid takes the dump's size. Endpoints that no longer fit are
    /// dropped; traffic is kept.
    pub fn load_map(&mut self, text: &str) -> Result<(), SessionError> {
        let grid = parse_map(text)?;
        if grid.size() != self.grid.size() {
            log::warn!(
                "session: map resized grid from {} to {}",
                self.grid.size(),
                grid.size()
            );
        }
        for slot in [&mut self.start, &mut self.goal] {
            if let Some(p) = *slot {
                if !grid.contains(p) {
                    log::warn!("session: dropping endpoint {p} outside loaded map");
                    *slot = None;
                }
            }
        }
        self.grid = grid;
        self.last = None;
        Ok(())
    }

    /// The terrain in dump format.
    pub fn save_map(&self) -> String {
        write_map(&self.grid)
    }

    pub fn load_from_file(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), SessionError> {
        let text = std::fs::read_to_string(path).map_err(MapError::from)?;
        self.load_map(&text)
    }

    pub fn save_to_file(&self, path: impl AsRef<std::path::Path>) -> Result<(), SessionError> {
        std::fs::write(path, self.save_map()).map_err(MapError::from)?;
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_grid(Grid::default())
    }
}

//! Route search over a terrain [`Grid`] with a [`TrafficOverlay`].

use gridroute_core::{Grid, Point, TrafficOverlay};

use crate::astar::astar_path;
use crate::cost::{CostConfig, CostModel};
use crate::error::SearchError;
use crate::path::Path;

/// Find the cheapest route from `start` to `goal`.
///
/// Returns `Ok(Some(path))` when a route exists, `Ok(None)` when the search
/// ran and every route is blocked, and `Err` when the endpoints are unusable.
/// The grid and overlay are only read.
pub fn search(
    grid: &Grid,
    overlay: &TrafficOverlay,
    start: Point,
    goal: Point,
) -> Result<Option<Path>, SearchError> {
    search_with(grid, overlay, &CostConfig::default(), start, goal)
}

/// Like [`search`], with an explicit cost configuration.
pub fn search_with(
    grid: &Grid,
    overlay: &TrafficOverlay,
    config: &CostConfig,
    start: Point,
    goal: Point,
) -> Result<Option<Path>, SearchError> {
    validate(grid, start, goal)?;
    let model = CostModel::with_config(grid, overlay, *config);
    Ok(astar_path(&model, grid.bounds(), start, goal))
}

fn validate(grid: &Grid, start: Point, goal: Point) -> Result<(), SearchError> {
    let start_terrain = grid.at(start).ok_or(SearchError::StartOutOfBounds(start))?;
    let goal_terrain = grid.at(goal).ok_or(SearchError::GoalOutOfBounds(goal))?;
    if !start_terrain.is_passable() {
        return Err(SearchError::StartIsObstacle(start));
    }
    if !goal_terrain.is_passable() {
        return Err(SearchError::GoalIsObstacle(goal));
    }
    Ok(())
}

use thiserror::Error;

use gridroute_core::Point;

/// Reasons a search could not start.
///
/// A search that runs and finds no route is not an error; it returns
/// `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("start {0} is outside the grid")]
    StartOutOfBounds(Point),
    #[error("goal {0} is outside the grid")]
    GoalOutOfBounds(Point),
    #[error("start {0} is an obstacle")]
    StartIsObstacle(Point),
    #[error("goal {0} is an obstacle")]
    GoalIsObstacle(Point),
}

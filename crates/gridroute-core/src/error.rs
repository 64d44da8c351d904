use thiserror::Error;

use crate::geom::Point;

/// Errors raised when building or accessing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width or height was not strictly positive.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },
    /// The coordinate lies outside the grid.
    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(Point),
}

use thiserror::Error;

use gridroute_core::GridError;
use gridroute_paths::SearchError;

/// Errors from reading or writing the plaintext map dump.
#[derive(Debug, Error)]
pub enum MapError {
    /// The text holds no rows.
    #[error("map is empty")]
    Empty,
    /// A row has a different number of cells than the first row.
    #[error("line {line}: expected {expected} cells, found {found}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A token is not a known terrain code.
    #[error("line {line}, column {column}: invalid terrain code {token:?}")]
    InvalidCode {
        line: usize,
        column: usize,
        token: String,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("map file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from [`Session`](crate::Session) operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no start has been placed")]
    MissingStart,
    #[error("no goal has been placed")]
    MissingGoal,
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Map(#[from] MapError),
}

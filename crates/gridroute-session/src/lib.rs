//! Route-planning session state for grid front ends.
//!
//! A [`Session`] owns what the user edits between searches (terrain,
//! traffic, start and goal) and runs `gridroute-paths` over it on request,
//! keeping the last [`RouteReport`]. The [`format`] module reads and writes
//! the plaintext map dump used to save and restore terrain.

mod config;
mod error;
pub mod format;
mod report;
mod session;

pub use config::SessionConfig;
pub use error::{MapError, SessionError};
pub use format::{load_into, parse_map, write_map};
pub use report::RouteReport;
pub use session::Session;

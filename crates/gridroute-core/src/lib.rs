//! **gridroute-core** — core types for grid route planning.
//!
//! This crate provides the data a route search runs over: geometry
//! primitives, the terrain [`Grid`], and the sparse [`TrafficOverlay`] of
//! extra step costs. It holds no algorithms beyond bounds-checked storage
//! and neighbour enumeration; see `gridroute-paths` for the search itself.

pub mod error;
pub mod geom;
pub mod grid;
pub mod terrain;
pub mod traffic;

pub use error::GridError;
pub use geom::{Point, Range, RangeIter};
pub use grid::{Grid, MAX_CELLS};
pub use terrain::Terrain;
pub use traffic::TrafficOverlay;

/// Board width used when no size is configured.
pub const DEFAULT_WIDTH: i32 = 40;
/// Board height used when no size is configured.
pub const DEFAULT_HEIGHT: i32 = 40;

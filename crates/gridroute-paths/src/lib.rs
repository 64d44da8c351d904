//! A* route search over terrain grids.
//!
//! The entry point is [`search`]: given a [`Grid`](gridroute_core::Grid), a
//! [`TrafficOverlay`](gridroute_core::TrafficOverlay) and two endpoints it
//! returns the cheapest orthogonal route, `None` when the endpoints are
//! disconnected, or a [`SearchError`] when the endpoints cannot be searched
//! from at all.
//!
//! Costs come from [`CostModel`]: one unit per step plus whatever the
//! overlay adds for the destination cell. The heuristic is Manhattan
//! distance. Frontier ties are broken by insertion order, so repeated
//! searches over the same inputs return the same route.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | step costs |
//! | [`AstarPather`] : [`WeightedPather`] | admissible heuristic |
//!
//! [`astar_path`] runs over any [`AstarPather`]; [`CostModel`] is the
//! implementation [`search`] uses.

mod astar;
mod cost;
mod distance;
mod error;
mod path;
mod search;
mod traits;

pub use astar::astar_path;
pub use cost::{BASE_STEP_COST, CostConfig, CostModel};
pub use distance::manhattan;
pub use error::SearchError;
pub use path::Path;
pub use search::{search, search_with};
pub use traits::{AstarPather, Pather, WeightedPather};

use std::fmt;

use gridroute_core::Point;
use gridroute_paths::Path;

/// Outcome of one [`Session::run`](crate::Session::run).
///
/// Displays as the route listing printed after a search:
///
/// ```text
/// Optimal Path:
/// (0, 0)
/// (1, 0)
/// Optimal Path Cost: 1
/// ```
///
/// or `No path found.` when the endpoints are disconnected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteReport {
    pub start: Point,
    pub goal: Point,
    pub path: Option<Path>,
}

impl RouteReport {
    /// Whether a route was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Step count of the route, if any.
    pub fn cost(&self) -> Option<usize> {
        self.path.as_ref().map(Path::cost)
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(path) = &self.path else {
            return writeln!(f, "No path found.");
        };
        writeln!(f, "Optimal Path:")?;
        for p in path {
            writeln!(f, "{p}")?;
        }
        writeln!(f, "Optimal Path Cost: {}", path.cost())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridroute_core::{Grid, Terrain, TrafficOverlay};
    use gridroute_paths::search;

    fn report(grid: &Grid, start: Point, goal: Point) -> RouteReport {
        RouteReport {
            start,
            goal,
            path: search(grid, &TrafficOverlay::new(), start, goal).unwrap(),
        }
    }

    #[test]
    fn found_listing() {
        let g = Grid::new(3, 1).unwrap();
        let r = report(&g, Point::new(0, 0), Point::new(2, 0));
        assert!(r.is_found());
        assert_eq!(r.cost(), Some(2));
        assert_eq!(
            r.to_string(),
            "Optimal Path:\n(0, 0)\n(1, 0)\n(2, 0)\nOptimal Path Cost: 2\n"
        );
    }

    #[test]
    fn not_found_listing() {
        let mut g = Grid::new(3, 1).unwrap();
        g.set(Point::new(1, 0), Terrain::Obstacle).unwrap();
        let r = report(&g, Point::new(0, 0), Point::new(2, 0));
        assert!(!r.is_found());
        assert_eq!(r.cost(), None);
        assert_eq!(r.to_string(), "No path found.\n");
    }
}

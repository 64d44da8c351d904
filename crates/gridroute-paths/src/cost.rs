//! Traversal costs over a terrain grid plus traffic overlay.

use gridroute_core::{Grid, Point, Terrain, TrafficOverlay};

use crate::distance::manhattan;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Cost of one orthogonal step onto a passable cell before any extras.
pub const BASE_STEP_COST: u64 = 1;

/// Tunable parts of the cost model.
///
/// The default reproduces plain traffic-only costing: hazards are
/// traversable and cost the same as open ground.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CostConfig {
    /// Extra cost for stepping onto a [`Terrain::Hazard`] cell.
    pub hazard_penalty: u32,
}

/// Maps moves on a [`Grid`] to costs, adding [`TrafficOverlay`] penalties.
///
/// Only the destination cell matters: the cost of `from → to` is
/// [`BASE_STEP_COST`] plus the overlay entry at `to` (plus the hazard
/// penalty if configured). Every step therefore costs at least 1, which keeps
/// the Manhattan heuristic admissible and consistent.
#[derive(Debug, Clone, Copy)]
pub struct CostModel<'a> {
    grid: &'a Grid,
    overlay: &'a TrafficOverlay,
    config: CostConfig,
}

impl<'a> CostModel<'a> {
    /// Cost model with the default configuration.
    pub fn new(grid: &'a Grid, overlay: &'a TrafficOverlay) -> Self {
        Self::with_config(grid, overlay, CostConfig::default())
    }

    pub fn with_config(grid: &'a Grid, overlay: &'a TrafficOverlay, config: CostConfig) -> Self {
        Self {
            grid,
            overlay,
            config,
        }
    }

    /// The grid being costed.
    #[inline]
    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    #[inline]
    pub fn config(&self) -> CostConfig {
        self.config
    }

    /// Cost of stepping onto `to`. `from` is not consulted.
    ///
    /// Overlay and penalty are both `u32`, so the sum always fits and
    /// distinct traffic values give distinct costs.
    pub fn step_cost(&self, _from: Point, to: Point) -> u64 {
        let mut cost = BASE_STEP_COST + u64::from(self.overlay.get(to));
        if self.grid.at(to) == Some(Terrain::Hazard) {
            cost += u64::from(self.config.hazard_penalty);
        }
        cost
    }

    /// Manhattan distance from `p` to `goal`.
    #[inline]
    pub fn heuristic(&self, p: Point, goal: Point) -> u64 {
        u64::from(manhattan(p, goal).unsigned_abs()) * BASE_STEP_COST
    }
}

impl Pather for CostModel<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(self.grid.neighbors(p).filter(|&n| self.grid.is_passable(n)));
    }
}

impl WeightedPather for CostModel<'_> {
    fn cost(&self, from: Point, to: Point) -> u64 {
        self.step_cost(from, to)
    }
}

impl AstarPather for CostModel<'_> {
    fn estimate(&self, from: Point, to: Point) -> u64 {
        self.heuristic(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid5() -> Grid {
        Grid::new(5, 5).unwrap()
    }

    #[test]
    fn base_cost_without_traffic() {
        let g = grid5();
        let o = TrafficOverlay::new();
        let cm = CostModel::new(&g, &o);
        assert_eq!(cm.step_cost(Point::new(0, 0), Point::new(1, 0)), 1);
    }

    #[test]
    fn traffic_adds_to_destination_only() {
        let g = grid5();
        let mut o = TrafficOverlay::new();
        o.insert(Point::new(2, 0), 10);
        let cm = CostModel::new(&g, &o);
        assert_eq!(cm.step_cost(Point::new(1, 0), Point::new(2, 0)), 11);
        assert_eq!(cm.step_cost(Point::new(2, 0), Point::new(3, 0)), 1);
    }

    #[test]
    fn huge_traffic_is_exact() {
        let mut g = grid5();
        g.set(Point::new(2, 0), Terrain::Hazard).unwrap();
        let mut o = TrafficOverlay::new();
        o.insert(Point::new(1, 0), u32::MAX);
        o.insert(Point::new(2, 0), u32::MAX);
        o.insert(Point::new(3, 0), u32::MAX - 1);
        let cm = CostModel::with_config(&g, &o, CostConfig { hazard_penalty: u32::MAX });
        assert_eq!(cm.step_cost(Point::ZERO, Point::new(1, 0)), 1 << 32);
        assert_eq!(cm.step_cost(Point::ZERO, Point::new(2, 0)), (1 << 33) - 1);
        assert!(
            cm.step_cost(Point::ZERO, Point::new(3, 0))
                < cm.step_cost(Point::ZERO, Point::new(1, 0))
        );
    }

    #[test]
    fn hazard_is_free_by_default() {
        let mut g = grid5();
        g.set(Point::new(1, 0), Terrain::Hazard).unwrap();
        let o = TrafficOverlay::new();
        let cm = CostModel::new(&g, &o);
        assert_eq!(cm.step_cost(Point::ZERO, Point::new(1, 0)), 1);

        let cm = CostModel::with_config(&g, &o, CostConfig { hazard_penalty: 3 });
        assert_eq!(cm.step_cost(Point::ZERO, Point::new(1, 0)), 4);
        assert_eq!(cm.step_cost(Point::ZERO, Point::new(0, 1)), 1);
    }

    #[test]
    fn road_costs_like_open() {
        let mut g = grid5();
        g.set(Point::new(1, 0), Terrain::RoadPreferred).unwrap();
        let o = TrafficOverlay::new();
        let cm = CostModel::with_config(&g, &o, CostConfig { hazard_penalty: 9 });
        assert_eq!(cm.step_cost(Point::ZERO, Point::new(1, 0)), 1);
    }

    #[test]
    fn heuristic_is_manhattan() {
        let g = grid5();
        let o = TrafficOverlay::new();
        let cm = CostModel::new(&g, &o);
        assert_eq!(cm.heuristic(Point::new(0, 0), Point::new(4, 3)), 7);
        assert_eq!(cm.estimate(Point::new(4, 3), Point::new(4, 3)), 0);
    }

    #[test]
    fn neighbors_skip_obstacles() {
        let mut g = grid5();
        g.set(Point::new(1, 0), Terrain::Obstacle).unwrap();
        g.set(Point::new(0, 1), Terrain::Hazard).unwrap();
        let o = TrafficOverlay::new();
        let cm = CostModel::new(&g, &o);
        let mut buf = Vec::new();
        cm.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1)]);
    }
}

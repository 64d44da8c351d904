//! Sparse extra traversal costs layered over a grid.

use std::collections::HashMap;

use crate::geom::Point;

/// Additional cost for stepping onto particular cells.
///
/// Cells without an entry cost nothing extra. The overlay is independent of
/// any [`Grid`](crate::Grid): it can be cleared or rebuilt without touching
/// terrain, and entries outside a grid are simply never consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrafficOverlay {
    extra: HashMap<Point, u32>,
}

impl TrafficOverlay {
    /// An empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra cost at `p`; zero when absent.
    #[inline]
    pub fn get(&self, p: Point) -> u32 {
        self.extra.get(&p).copied().unwrap_or(0)
    }

    /// Set the extra cost at `p`, returning the previous entry.
    ///
    /// Inserting zero removes the entry.
    pub fn insert(&mut self, p: Point, cost: u32) -> Option<u32> {
        if cost == 0 {
            return self.extra.remove(&p);
        }
        self.extra.insert(p, cost)
    }

    /// Add `cost` on top of whatever is already at `p` (saturating).
    pub fn add(&mut self, p: Point, cost: u32) {
        if cost == 0 {
            return;
        }
        let e = self.extra.entry(p).or_insert(0);
        *e = e.saturating_add(cost);
    }

    /// Remove the entry at `p`.
    pub fn remove(&mut self, p: Point) -> Option<u32> {
        self.extra.remove(&p)
    }

    /// Whether `p` has a non-zero entry.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.extra.contains_key(&p)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.extra.clear();
    }

    /// Number of cells with extra cost.
    pub fn len(&self) -> usize {
        self.extra.len()
    }

    /// Whether no cell has extra cost.
    pub fn is_empty(&self) -> bool {
        self.extra.is_empty()
    }

    /// Iterate over `(Point, cost)` entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, u32)> + '_ {
        self.extra.iter().map(|(&p, &c)| (p, c))
    }

    /// Entries sorted by point, for reproducible output.
    pub fn sorted_entries(&self) -> Vec<(Point, u32)> {
        let mut v: Vec<_> = self.iter().collect();
        v.sort_unstable_by_key(|&(p, _)| p);
        v
    }
}

impl FromIterator<(Point, u32)> for TrafficOverlay {
    fn from_iter<I: IntoIterator<Item = (Point, u32)>>(iter: I) -> Self {
        let mut o = Self::new();
        o.extend(iter);
        o
    }
}

impl Extend<(Point, u32)> for TrafficOverlay {
    fn extend<I: IntoIterator<Item = (Point, u32)>>(&mut self, iter: I) {
        for (p, c) in iter {
            self.insert(p, c);
        }
    }
}

// Serialized as a sorted list of entries; JSON objects cannot key on points.

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct TrafficEntry {
    pos: Point,
    cost: u32,
}

#[cfg(feature = "serde")]
impl serde::Serialize for TrafficOverlay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let entries = self.sorted_entries();
        let mut seq = serializer.serialize_seq(Some(entries.len()))?;
        for (pos, cost) in entries {
            seq.serialize_element(&TrafficEntry { pos, cost })?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TrafficOverlay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<TrafficEntry>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(|e| (e.pos, e.cost)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_means_zero() {
        let o = TrafficOverlay::new();
        assert_eq!(o.get(Point::new(3, 3)), 0);
        assert!(o.is_empty());
    }

    #[test]
    fn insert_and_remove() {
        let mut o = TrafficOverlay::new();
        assert_eq!(o.insert(Point::new(2, 0), 10), None);
        assert_eq!(o.get(Point::new(2, 0)), 10);
        assert_eq!(o.insert(Point::new(2, 0), 4), Some(10));
        assert_eq!(o.remove(Point::new(2, 0)), Some(4));
        assert!(!o.contains(Point::new(2, 0)));
    }

    #[test]
    fn zero_insert_clears_entry() {
        let mut o = TrafficOverlay::new();
        o.insert(Point::new(1, 1), 5);
        assert_eq!(o.insert(Point::new(1, 1), 0), Some(5));
        assert!(o.is_empty());
    }

    #[test]
    fn add_saturates() {
        let mut o = TrafficOverlay::new();
        o.add(Point::new(0, 0), 3);
        o.add(Point::new(0, 0), 4);
        assert_eq!(o.get(Point::new(0, 0)), 7);
        o.add(Point::new(0, 0), u32::MAX);
        assert_eq!(o.get(Point::new(0, 0)), u32::MAX);
        o.add(Point::new(5, 5), 0);
        assert!(!o.contains(Point::new(5, 5)));
    }

    #[test]
    fn collect_and_sort() {
        let o: TrafficOverlay = [
            (Point::new(3, 1), 2),
            (Point::new(0, 1), 9),
            (Point::new(1, 0), 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(o.len(), 3);
        assert_eq!(
            o.sorted_entries(),
            vec![
                (Point::new(1, 0), 1),
                (Point::new(0, 1), 9),
                (Point::new(3, 1), 2),
            ]
        );
        let mut o = o;
        o.clear();
        assert!(o.is_empty());
    }
}

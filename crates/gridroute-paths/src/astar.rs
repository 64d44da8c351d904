use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridroute_core::{Point, Range};

use crate::path::Path;
use crate::traits::AstarPather;

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-call node storage
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct Node {
    /// Best known cost from the start; `None` until first reached.
    g: Option<u64>,
    parent: usize,
    closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: None,
            parent: NO_PARENT,
            closed: false,
        }
    }
}

/// Frontier entry, ordered by `f` and then by insertion order.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: u64,
    g: u64,
    seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, and among
        // equal f the entry pushed earliest.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dense index over a grid rectangle.
struct Layout {
    rng: Range,
    width: usize,
}

impl Layout {
    fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

// ---------------------------------------------------------------------------
// A*
// ---------------------------------------------------------------------------

/// Compute a cheapest path from `from` to `to` inside `rng` using A*.
///
/// This is the generic engine behind [`search`](crate::search); it trusts
/// the pather for passability and does no input validation beyond returning
/// `None` when an endpoint lies outside `rng`. Neighbours outside `rng` are
/// ignored.
///
/// Frontier ties on `f` are broken by insertion order, so the result is
/// fully determined by the pather's neighbour order. All state lives for the
/// duration of the call.
pub fn astar_path<P: AstarPather>(pather: &P, rng: Range, from: Point, to: Point) -> Option<Path> {
    let layout = Layout::new(rng);
    let start_idx = layout.idx(from)?;
    let goal_idx = layout.idx(to)?;

    if start_idx == goal_idx {
        return Some(Path::new(vec![from], 0));
    }

    let mut nodes = vec![Node::default(); rng.len()];
    nodes[start_idx].g = Some(0);

    let mut seq: u64 = 0;
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    open.push(NodeRef {
        idx: start_idx,
        f: pather.estimate(from, to),
        g: 0,
        seq,
    });

    let mut nbuf: Vec<Point> = Vec::with_capacity(4);
    let mut expanded = 0usize;

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };

        let ci = current.idx;

        // Skip stale entries: superseded by a cheaper push, or already done.
        if nodes[ci].closed || nodes[ci].g.is_some_and(|g| current.g > g) {
            continue;
        }

        if ci == goal_idx {
            break 'search true;
        }

        nodes[ci].closed = true;
        expanded += 1;
        let current_g = current.g;
        let current_point = layout.point(ci);

        nbuf.clear();
        pather.neighbors(current_point, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = layout.idx(np) else {
                continue;
            };
            let tentative_g = current_g.saturating_add(pather.cost(current_point, np));

            let n = &mut nodes[ni];
            if n.g.is_some_and(|g| tentative_g >= g) {
                continue;
            }
            n.g = Some(tentative_g);
            n.parent = ci;
            // A cheaper route reopens the node.
            n.closed = false;

            seq += 1;
            let f = tentative_g.saturating_add(pather.estimate(np, to));
            log::trace!("astar: push {np} g={tentative_g} f={f}");
            open.push(NodeRef {
                idx: ni,
                f,
                g: tentative_g,
                seq,
            });
        }
    };

    log::debug!(
        "astar: {from} -> {to}: {} after expanding {expanded} nodes",
        if found { "found" } else { "no path" }
    );

    if !found {
        return None;
    }

    // Reconstruct path.
    let mut path = Vec::new();
    let mut ci = goal_idx;
    while ci != NO_PARENT {
        path.push(layout.point(ci));
        ci = nodes[ci].parent;
    }
    path.reverse();
    Some(Path::new(path, nodes[goal_idx].g.unwrap_or_default()))
}

//! Edge costs and the priority-queue entry shared by the search strategies.

use std::cmp::Ordering;

/// Edge or path cost.
pub type Cost = f64;

/// Sentinel value meaning "no edge" or "unreachable" in cost queries and
/// distance maps. Orders above every finite cost and absorbs addition.
pub const UNREACHABLE: Cost = f64::INFINITY;

/// Whether `cost` is usable as an edge weight.
#[inline]
pub(crate) fn is_valid_edge_cost(cost: Cost) -> bool {
    cost.is_finite() && cost >= 0.0
}

/// Reference into the node array, ordered by `dist` for use in `BinaryHeap`.
///
/// Equal distances fall back to the node index so that the lowest index
/// (earliest inserted node) pops first.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) dist: Cost,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest dist first.
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn unreachable_orders_above_finite_and_absorbs_addition() {
        assert!(UNREACHABLE > 1e300);
        assert_eq!(UNREACHABLE + 5.0, UNREACHABLE);
    }

    #[test]
    fn valid_edge_costs() {
        assert!(is_valid_edge_cost(0.0));
        assert!(is_valid_edge_cost(2.5));
        assert!(!is_valid_edge_cost(-1.0));
        assert!(!is_valid_edge_cost(f64::NAN));
        assert!(!is_valid_edge_cost(UNREACHABLE));
    }

    #[test]
    fn heap_pops_smallest_then_lowest_index() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 3, dist: 2.0 });
        heap.push(NodeRef { idx: 2, dist: 1.0 });
        heap.push(NodeRef { idx: 1, dist: 2.0 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![2, 1, 3]);
    }
}

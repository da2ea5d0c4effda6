use std::collections::BinaryHeap;
use std::fmt;
use std::hash::Hash;

use crate::ShortestPathEngine;
use crate::cost::NodeRef;
use crate::dijkstra::Search;

impl<N> ShortestPathEngine<'_, N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    /// Priority-queue Dijkstra. Settles nodes in the same order as the dense
    /// scan: smallest distance first, lowest insertion index on ties.
    pub(crate) fn heap(&self, source: usize, target: Option<usize>) -> Search {
        let graph = self.graph;
        let n = graph.len();
        let mut search = Search::new(n, source);

        let mut closed = vec![false; n];
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: source,
            dist: 0.0,
        });

        while let Some(current) = open.pop() {
            let ci = current.idx;
            // Skip stale entries.
            if closed[ci] || current.dist > search.dist[ci] {
                continue;
            }
            closed[ci] = true;
            // Search::new already records the source as settled.
            if ci != source {
                search.settle(graph, ci);
            }
            if target == Some(ci) {
                break;
            }

            for (ni, c) in graph.neighbor_indices(ci) {
                if closed[ni] {
                    continue;
                }
                let tentative = current.dist + c;
                if tentative < search.dist[ni] {
                    search.dist[ni] = tentative;
                    search.parent[ni] = Some(ci);
                    open.push(NodeRef {
                        idx: ni,
                        dist: tentative,
                    });
                }
            }
        }

        search
    }
}

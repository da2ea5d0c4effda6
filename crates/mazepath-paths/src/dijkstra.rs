use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::cost::{Cost, UNREACHABLE};
use crate::error::GraphError;
use crate::graph::WeightedGraph;
use crate::route::{Route, ShortestPaths};

/// How the engine picks the next node to settle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Linear scan over the unsolved set: O(V²).
    #[default]
    Dense,
    /// Priority queue with lazy deletion over the adjacency lists:
    /// O(V + E log V).
    BinaryHeap,
}

/// Dijkstra single-source shortest paths over a borrowed [`WeightedGraph`].
///
/// The engine only holds a shared reference to the graph; every call
/// allocates its own result maps.
#[derive(Debug)]
pub struct ShortestPathEngine<'g, N> {
    pub(crate) graph: &'g WeightedGraph<N>,
    strategy: Strategy,
}

impl<N> Clone for ShortestPathEngine<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for ShortestPathEngine<'_, N> {}

impl<'g, N> ShortestPathEngine<'g, N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    /// Create an engine using [`Strategy::Dense`].
    pub fn new(graph: &'g WeightedGraph<N>) -> Self {
        Self {
            graph,
            strategy: Strategy::default(),
        }
    }

    /// Select the search strategy (builder).
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The strategy in use.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Distances and paths from `source` to every node.
    ///
    /// Fails only if `source` is not declared.
    pub fn shortest_paths(&self, source: &N) -> Result<ShortestPaths<N>, GraphError> {
        let s = self.graph.index_of(source)?;
        let search = self.run(s, None);
        Ok(search.into_shortest_paths(self.graph))
    }

    /// Shortest route from `source` to `target`.
    ///
    /// An unreachable target is not an error: the result has an
    /// [`UNREACHABLE`] distance and a path holding only `source`. Fails only
    /// if either node is not declared.
    pub fn shortest_path(&self, source: &N, target: &N) -> Result<Route<N>, GraphError> {
        self.shortest_path_explored(source, target).map(|(route, _)| route)
    }

    /// Like [`shortest_path`](Self::shortest_path), also returning the nodes
    /// settled before the search stopped, in settle order.
    pub fn shortest_path_explored(
        &self,
        source: &N,
        target: &N,
    ) -> Result<(Route<N>, Vec<N>), GraphError> {
        let s = self.graph.index_of(source)?;
        let t = self.graph.index_of(target)?;
        if s == t {
            let route = Route {
                distance: 0.0,
                path: vec![source.clone()],
            };
            return Ok((route, vec![source.clone()]));
        }

        let search = self.run(s, Some(t));
        let explored = search
            .settled
            .iter()
            .map(|&i| self.graph.node(i).clone())
            .collect();
        let route = match search.path_to(t) {
            Some(path) => Route {
                distance: search.dist[t],
                path: path
                    .into_iter()
                    .map(|i| self.graph.node(i).clone())
                    .collect(),
            },
            None => {
                log::warn!("unreachable destination {target:?} from {source:?}");
                Route::unreachable(source.clone())
            }
        };
        Ok((route, explored))
    }

    fn run(&self, source: usize, target: Option<usize>) -> Search {
        match self.strategy {
            Strategy::Dense => self.dense(source, target),
            Strategy::BinaryHeap => self.heap(source, target),
        }
    }

    /// Reference O(V²) Dijkstra. Stops early once `target` is settled or
    /// no unsolved node has a finite distance.
    fn dense(&self, source: usize, target: Option<usize>) -> Search {
        let graph = self.graph;
        let n = graph.len();
        let mut search = Search::new(n, source);

        // Direct neighbours of the source start at their edge cost.
        for v in 0..n {
            if v == source {
                continue;
            }
            let c = graph.cost_at(source, v);
            if c < UNREACHABLE {
                search.dist[v] = c;
                search.parent[v] = Some(source);
            }
        }

        let mut unsolved = vec![true; n];
        unsolved[source] = false;
        let mut remaining = n.saturating_sub(1);

        while remaining > 0 {
            let mut w = None;
            let mut min = UNREACHABLE;
            for v in 0..n {
                if unsolved[v] && search.dist[v] < min {
                    min = search.dist[v];
                    w = Some(v);
                }
            }
            let Some(w) = w else {
                break;
            };

            unsolved[w] = false;
            remaining -= 1;
            search.settle(graph, w);
            if target == Some(w) {
                break;
            }

            for (v, c) in graph.neighbor_indices(w) {
                if !unsolved[v] {
                    continue;
                }
                let tentative = min + c;
                if tentative < search.dist[v] {
                    search.dist[v] = tentative;
                    search.parent[v] = Some(w);
                }
            }
        }

        search
    }
}

// ---------------------------------------------------------------------------
// Per-run scratch state
// ---------------------------------------------------------------------------

/// Index-based distances and predecessors of one run.
pub(crate) struct Search {
    pub(crate) source: usize,
    pub(crate) dist: Vec<Cost>,
    pub(crate) parent: Vec<Option<usize>>,
    pub(crate) settled: Vec<usize>,
}

impl Search {
    pub(crate) fn new(n: usize, source: usize) -> Self {
        let mut dist = vec![UNREACHABLE; n];
        dist[source] = 0.0;
        Self {
            source,
            dist,
            parent: vec![None; n],
            settled: vec![source],
        }
    }

    pub(crate) fn settle<N>(&mut self, graph: &WeightedGraph<N>, idx: usize)
    where
        N: Clone + Eq + Hash + fmt::Debug,
    {
        log::trace!("settled {:?} at {}", graph.node(idx), self.dist[idx]);
        self.settled.push(idx);
    }

    /// Node indices from the source to `idx`, or `None` if never reached.
    pub(crate) fn path_to(&self, idx: usize) -> Option<Vec<usize>> {
        if idx != self.source && self.parent[idx].is_none() {
            return None;
        }
        let mut path = vec![idx];
        let mut cur = idx;
        while let Some(p) = self.parent[cur] {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }

    pub(crate) fn into_shortest_paths<N>(self, graph: &WeightedGraph<N>) -> ShortestPaths<N>
    where
        N: Clone + Eq + Hash + fmt::Debug,
    {
        let nodes = graph.nodes();
        let mut distances = HashMap::with_capacity(nodes.len());
        let mut paths = HashMap::new();
        for (i, n) in nodes.iter().enumerate() {
            distances.insert(n.clone(), self.dist[i]);
            if let Some(path) = self.path_to(i) {
                paths.insert(n.clone(), path.into_iter().map(|j| nodes[j].clone()).collect());
            }
        }
        ShortestPaths {
            source: nodes[self.source].clone(),
            distances,
            paths,
            settled: self.settled.iter().map(|&i| nodes[i].clone()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience entry points on the graph
// ---------------------------------------------------------------------------

impl<N> WeightedGraph<N>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    /// Dense Dijkstra from `source` to every node.
    pub fn dijkstra(&self, source: &N) -> Result<ShortestPaths<N>, GraphError> {
        ShortestPathEngine::new(self).shortest_paths(source)
    }

    /// Dense Dijkstra from `source` to `target`.
    ///
    /// See [`ShortestPathEngine::shortest_path`] for the unreachable case.
    pub fn shortest_path(&self, source: &N, target: &N) -> Result<Route<N>, GraphError> {
        ShortestPathEngine::new(self).shortest_path(source, target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRATEGIES: [Strategy; 2] = [Strategy::Dense, Strategy::BinaryHeap];

    fn five_cycle() -> WeightedGraph<&'static str> {
        WeightedGraph::from_parts(
            ["a", "b", "c", "d", "e"],
            [
                ("a", "b", 1.0),
                ("a", "e", 1.0),
                ("b", "c", 1.0),
                ("b", "e", 1.0),
                ("c", "d", 1.0),
                ("d", "e", 1.0),
            ],
        )
        .unwrap()
    }

    /// The weighted example graph u..z.
    fn weighted() -> WeightedGraph<&'static str> {
        WeightedGraph::from_parts(
            ["u", "v", "w", "x", "y", "z"],
            [
                ("u", "v", 7.0),
                ("u", "w", 3.0),
                ("u", "x", 5.0),
                ("v", "w", 3.0),
                ("v", "y", 4.0),
                ("w", "x", 4.0),
                ("w", "y", 8.0),
                ("x", "y", 7.0),
                ("x", "z", 9.0),
                ("y", "z", 2.0),
            ],
        )
        .unwrap()
    }

    fn assert_valid_route(g: &WeightedGraph<&'static str>, route: &Route<&'static str>) {
        let mut total = 0.0;
        for step in route.path.windows(2) {
            let c = g.cost(&step[0], &step[1]).unwrap();
            assert!(c.is_finite(), "{:?} -> {:?} is not an edge", step[0], step[1]);
            total += c;
        }
        assert_eq!(total, route.distance);
    }

    #[test]
    fn five_cycle_a_to_d() {
        let g = five_cycle();
        for s in STRATEGIES {
            let r = ShortestPathEngine::new(&g)
                .with_strategy(s)
                .shortest_path(&"a", &"d")
                .unwrap();
            assert_eq!(r.distance, 2.0);
            assert_eq!(r.path, vec!["a", "e", "d"]);
        }
    }

    #[test]
    fn weighted_distances() {
        let g = weighted();
        for s in STRATEGIES {
            let sp = ShortestPathEngine::new(&g)
                .with_strategy(s)
                .shortest_paths(&"u")
                .unwrap();
            assert_eq!(sp.distance(&"u"), 0.0);
            assert_eq!(sp.distance(&"v"), 6.0);
            assert_eq!(sp.distance(&"w"), 3.0);
            assert_eq!(sp.distance(&"x"), 5.0);
            assert_eq!(sp.distance(&"y"), 10.0);
            assert_eq!(sp.distance(&"z"), 12.0);
            assert_eq!(sp.path(&"z"), Some(&["u", "w", "v", "y", "z"][..]));
            for n in g.nodes() {
                assert_valid_route(&g, &sp.route(n).unwrap());
            }
        }
    }

    #[test]
    fn source_to_itself() {
        let g = five_cycle();
        let r = g.shortest_path(&"c", &"c").unwrap();
        assert_eq!(r, Route { distance: 0.0, path: vec!["c"] });

        let sp = g.dijkstra(&"c").unwrap();
        assert_eq!(sp.path(&"c"), Some(&["c"][..]));
        assert_eq!(sp.settled()[0], "c");
    }

    #[test]
    fn unreachable_target_degrades() {
        let mut g = five_cycle();
        g.append_node("f");
        for s in STRATEGIES {
            let engine = ShortestPathEngine::new(&g).with_strategy(s);
            let r = engine.shortest_path(&"a", &"f").unwrap();
            assert_eq!(r.distance, UNREACHABLE);
            assert_eq!(r.path, vec!["a"]);

            let sp = engine.shortest_paths(&"a").unwrap();
            assert_eq!(sp.distance(&"f"), UNREACHABLE);
            assert!(sp.path(&"f").is_none());
            assert!(!sp.is_reachable(&"f"));
            assert_eq!(sp.distances().len(), 6);
            assert_eq!(sp.paths().len(), 5);
        }
    }

    #[test]
    fn undeclared_endpoints_fail() {
        let g = five_cycle();
        assert!(matches!(
            g.shortest_path(&"a", &"q"),
            Err(GraphError::UndeclaredNode(_))
        ));
        assert!(matches!(
            g.dijkstra(&"q"),
            Err(GraphError::UndeclaredNode(_))
        ));
    }

    #[test]
    fn zero_weight_edges_are_traversed() {
        let g = WeightedGraph::from_parts(
            ["a", "b", "c"],
            [("a", "b", 0.0), ("b", "c", 0.0), ("a", "c", 1.0)],
        )
        .unwrap();
        for s in STRATEGIES {
            let r = ShortestPathEngine::new(&g)
                .with_strategy(s)
                .shortest_path(&"a", &"c")
                .unwrap();
            assert_eq!(r.distance, 0.0);
            assert_eq!(r.path, vec!["a", "b", "c"]);
        }
    }

    #[test]
    fn targeted_search_stops_at_target() {
        // Chain a - b - c - d: a search for b never settles c or d.
        let g = WeightedGraph::from_parts(
            ["a", "b", "c", "d"],
            [("a", "b", 1.0), ("b", "c", 1.0), ("c", "d", 1.0)],
        )
        .unwrap();
        let full = g.dijkstra(&"a").unwrap();
        assert_eq!(full.settled(), &["a", "b", "c", "d"]);
        for s in STRATEGIES {
            let engine = ShortestPathEngine::new(&g).with_strategy(s);
            let (r, explored) = engine.shortest_path_explored(&"a", &"b").unwrap();
            assert_eq!(r.path, vec!["a", "b"]);
            assert_eq!(explored, vec!["a", "b"]);
        }
    }

    #[test]
    fn strategies_agree_on_settle_order() {
        let g = weighted();
        let dense = g.dijkstra(&"z").unwrap();
        let heap = ShortestPathEngine::new(&g)
            .with_strategy(Strategy::BinaryHeap)
            .shortest_paths(&"z")
            .unwrap();
        assert_eq!(dense.settled(), heap.settled());
        assert_eq!(dense.distances(), heap.distances());
    }

    #[test]
    fn single_node_graph() {
        let g = WeightedGraph::from_parts(["solo"], []).unwrap();
        let sp = g.dijkstra(&"solo").unwrap();
        assert_eq!(sp.distance(&"solo"), 0.0);
        assert_eq!(sp.settled(), &["solo"]);
        let (dist, paths) = sp.into_maps();
        assert_eq!(dist.len(), 1);
        assert_eq!(paths[&"solo"], vec!["solo"]);
    }
}

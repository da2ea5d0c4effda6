//! Randomised checks of the shortest-path engine against brute force.

use mazepath_paths::{
    Cost, Route, ShortestPathEngine, Strategy as SearchStrategy, UNREACHABLE, WeightedGraph,
};
use proptest::prelude::*;

const STRATEGIES: [SearchStrategy; 2] = [SearchStrategy::Dense, SearchStrategy::BinaryHeap];

/// Up to six nodes and fifteen integer-weighted edges.
fn arb_graph() -> impl Strategy<Value = WeightedGraph<usize>> {
    (1usize..7)
        .prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n, 0u8..10), 0..15)))
        .prop_map(|(n, edges)| {
            let mut g = WeightedGraph::from_parts(0..n, []).unwrap();
            for (a, b, w) in edges {
                if a != b {
                    g.append_edge(&a, &b, Cost::from(w)).unwrap();
                }
            }
            g
        })
}

/// Minimum cost over every simple path from `source`.
fn brute_force(g: &WeightedGraph<usize>, source: usize) -> Vec<Cost> {
    fn walk(g: &WeightedGraph<usize>, node: usize, cost: Cost, seen: &mut [bool], best: &mut [Cost]) {
        if cost < best[node] {
            best[node] = cost;
        }
        seen[node] = true;
        let next: Vec<(usize, Cost)> = g.neighbors(&node).unwrap().map(|(&n, c)| (n, c)).collect();
        for (n, c) in next {
            if !seen[n] {
                walk(g, n, cost + c, seen, best);
            }
        }
        seen[node] = false;
    }

    let mut best = vec![UNREACHABLE; g.len()];
    let mut seen = vec![false; g.len()];
    walk(g, source, 0.0, &mut seen, &mut best);
    best
}

fn check_route(g: &WeightedGraph<usize>, source: usize, target: usize, route: &Route<usize>) {
    assert_eq!(route.path.first(), Some(&source));
    assert_eq!(route.path.last(), Some(&target));
    let mut total = 0.0;
    for step in route.path.windows(2) {
        let c = g.cost(&step[0], &step[1]).unwrap();
        assert!(c.is_finite());
        total += c;
    }
    assert_eq!(total, route.distance);
}

proptest! {
    #[test]
    fn distances_match_brute_force(g in arb_graph(), pick in any::<prop::sample::Index>()) {
        let source = pick.index(g.len());
        let expected = brute_force(&g, source);
        for s in STRATEGIES {
            let sp = ShortestPathEngine::new(&g).with_strategy(s).shortest_paths(&source).unwrap();
            for n in 0..g.len() {
                prop_assert_eq!(sp.distance(&n), expected[n]);
                prop_assert_eq!(sp.is_reachable(&n), expected[n].is_finite());
            }
        }
    }

    #[test]
    fn routes_are_valid_walks(g in arb_graph(), a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
        let source = a.index(g.len());
        let target = b.index(g.len());
        for s in STRATEGIES {
            let route = ShortestPathEngine::new(&g).with_strategy(s).shortest_path(&source, &target).unwrap();
            if route.is_reachable() {
                check_route(&g, source, target, &route);
            } else {
                prop_assert_eq!(route.distance, UNREACHABLE);
                prop_assert_eq!(route.path, vec![source]);
            }
        }
    }

    #[test]
    fn cost_is_symmetric(g in arb_graph()) {
        for a in 0..g.len() {
            prop_assert_eq!(g.cost(&a, &a).unwrap(), 0.0);
            for b in 0..g.len() {
                prop_assert_eq!(g.cost(&a, &b).unwrap(), g.cost(&b, &a).unwrap());
            }
        }
    }

    #[test]
    fn source_route_is_trivial(g in arb_graph(), pick in any::<prop::sample::Index>()) {
        let source = pick.index(g.len());
        let route = g.shortest_path(&source, &source).unwrap();
        prop_assert_eq!(route.distance, 0.0);
        prop_assert_eq!(route.path, vec![source]);
    }
}

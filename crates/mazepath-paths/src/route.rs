//! Search results: a single [`Route`] and the full [`ShortestPaths`] maps.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::cost::{Cost, UNREACHABLE};

/// The shortest route to one target.
///
/// An unreachable target is reported as `distance == UNREACHABLE` with a
/// path holding only the source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<N> {
    pub distance: Cost,
    pub path: Vec<N>,
}

impl<N> Route<N> {
    /// The degraded result for a target that cannot be reached.
    pub fn unreachable(source: N) -> Self {
        Self {
            distance: UNREACHABLE,
            path: vec![source],
        }
    }

    /// Whether the target was reached.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    /// First node of the path.
    pub fn source(&self) -> Option<&N> {
        self.path.first()
    }

    /// Last node of the path. Equals the source when unreachable.
    pub fn target(&self) -> Option<&N> {
        self.path.last()
    }
}

/// Prints the distance, then the path as `a -> b -> c`.
impl<N: fmt::Display> fmt::Display for Route<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.distance)?;
        for (i, n) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// Distances and paths from one source to every node of a graph.
///
/// Produced fresh by each search and owned by the caller.
#[derive(Debug, Clone)]
pub struct ShortestPaths<N> {
    pub(crate) source: N,
    pub(crate) distances: HashMap<N, Cost>,
    pub(crate) paths: HashMap<N, Vec<N>>,
    pub(crate) settled: Vec<N>,
}

impl<N> ShortestPaths<N>
where
    N: Clone + Eq + Hash,
{
    /// The search source.
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Shortest distance to `n`; [`UNREACHABLE`] when `n` was not reached
    /// or is not part of the graph.
    pub fn distance(&self, n: &N) -> Cost {
        self.distances.get(n).copied().unwrap_or(UNREACHABLE)
    }

    /// Path from the source to `n`, both ends included. `None` when `n` was
    /// not reached.
    pub fn path(&self, n: &N) -> Option<&[N]> {
        self.paths.get(n).map(Vec::as_slice)
    }

    /// The route to `n`, if reached.
    pub fn route(&self, n: &N) -> Option<Route<N>> {
        let path = self.paths.get(n)?;
        Some(Route {
            distance: self.distance(n),
            path: path.clone(),
        })
    }

    /// Whether `n` was reached.
    pub fn is_reachable(&self, n: &N) -> bool {
        self.paths.contains_key(n)
    }

    /// Distance map covering every node of the graph.
    pub fn distances(&self) -> &HashMap<N, Cost> {
        &self.distances
    }

    /// Path map covering every reached node.
    pub fn paths(&self) -> &HashMap<N, Vec<N>> {
        &self.paths
    }

    /// Nodes in the order their distance became final, source first.
    pub fn settled(&self) -> &[N] {
        &self.settled
    }

    /// Split into the distance map and the path map.
    pub fn into_maps(self) -> (HashMap<N, Cost>, HashMap<N, Vec<N>>) {
        (self.distances, self.paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_display() {
        let r = Route {
            distance: 2.0,
            path: vec!["a", "e", "d"],
        };
        assert_eq!(r.to_string(), "2\na -> e -> d");
        assert!(r.is_reachable());
        assert_eq!(r.source(), Some(&"a"));
        assert_eq!(r.target(), Some(&"d"));
    }

    #[test]
    fn unreachable_route() {
        let r = Route::unreachable("a");
        assert!(!r.is_reachable());
        assert_eq!(r.path, vec!["a"]);
        assert_eq!(r.to_string(), "inf\na");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn route_round_trip() {
        let r = Route {
            distance: 3.5,
            path: vec!["x".to_string(), "y".to_string()],
        };
        let json = serde_json::to_string(&r).unwrap();
        let back: Route<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}

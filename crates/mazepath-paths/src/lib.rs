//! Dense weighted graphs and Dijkstra shortest paths.
//!
//! - [`WeightedGraph`] stores a symmetric cost matrix over arbitrary
//!   hashable node identifiers, with an explicit "no edge" entry.
//! - [`ShortestPathEngine`] runs single-source Dijkstra over a borrowed
//!   graph, either with the reference O(V²) scan ([`Strategy::Dense`]) or a
//!   binary heap ([`Strategy::BinaryHeap`]).
//!
//! Unreachable nodes report [`UNREACHABLE`] (positive infinity) instead of
//! an error; only references to undeclared nodes fail.

mod cost;
mod dijkstra;
mod error;
mod graph;
mod heap;
mod route;

pub use cost::{Cost, UNREACHABLE};
pub use dijkstra::{ShortestPathEngine, Strategy};
pub use error::GraphError;
pub use graph::{CostTable, WeightedGraph};
pub use route::{Route, ShortestPaths};

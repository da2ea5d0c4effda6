use thiserror::Error;

use crate::cost::Cost;

/// Errors raised by [`WeightedGraph`](crate::WeightedGraph) and the
/// shortest-path engine.
///
/// Node identifiers are carried in their `Debug` form so the error type
/// stays independent of the node type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// An edge or query referenced a node that was never declared.
    #[error("undeclared node {0}")]
    UndeclaredNode(String),
    /// Edge costs must be finite and non-negative.
    #[error("invalid cost {cost} for edge {a} -- {b}")]
    InvalidCost { a: String, b: String, cost: Cost },
    /// Adding the edge would make the sum of all edge costs infinite, so
    /// some path distance could overflow.
    #[error("edge {a} -- {b} with cost {cost} overflows the total edge cost")]
    CostOverflow { a: String, b: String, cost: Cost },
    /// Edges from a node to itself are rejected; self distance is always 0.
    #[error("self loop on node {0}")]
    SelfLoop(String),
}

impl GraphError {
    pub(crate) fn undeclared(n: &impl std::fmt::Debug) -> Self {
        Self::UndeclaredNode(format!("{n:?}"))
    }
}

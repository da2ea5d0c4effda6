use mazepath_core::{Coord, GridError};
use mazepath_paths::GraphError;
use thiserror::Error;

/// Errors from building or solving a [`Scenario`](crate::Scenario).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The source or target is a wall or lies outside the grid.
    #[error("endpoint {0} is blocked or outside the grid")]
    BlockedEndpoint(Coord),
}

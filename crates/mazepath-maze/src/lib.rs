//! Grid glue for mazepath: grid-to-graph conversion, path rendering, maze
//! generation and the [`Scenario`] entry point.

pub mod adapter;
pub mod error;
pub mod mazegen;
pub mod render;
pub mod scenario;

pub use adapter::{build_graph, grid_to_graph};
pub use error::ScenarioError;
pub use mazegen::MazeGen;
pub use render::{PathRenderer, RenderStyle};
pub use scenario::{Scenario, Solution, solve_grid};

//! Conversion of an occupancy [`Grid`] into graph nodes and edges.

use mazepath_core::{Coord, Grid};
use mazepath_paths::{Cost, GraphError, WeightedGraph};

/// Cost of a single orthogonal step between adjacent cells.
pub const STEP_COST: Cost = 1.0;

/// Node and edge lists extracted from a grid.
pub type GridParts = (Vec<Coord>, Vec<(Coord, Coord, Cost)>);

/// Enumerate the passable cells of `grid` and the edges between them.
///
/// Nodes come out in row-major order. Each passable cell is linked to its
/// passable right neighbour and its passable down neighbour, so every
/// 4-connected pair appears exactly once.
pub fn grid_to_graph(grid: &Grid) -> GridParts {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    for (c, cell) in grid.iter() {
        if !cell.is_passable() {
            continue;
        }
        nodes.push(c);
        for next in [c.right(), c.down()] {
            if grid.is_passable(next) {
                edges.push((c, next, STEP_COST));
            }
        }
    }
    (nodes, edges)
}

/// Build the [`WeightedGraph`] of `grid` directly.
pub fn build_graph(grid: &Grid) -> Result<WeightedGraph<Coord>, GraphError> {
    let (nodes, edges) = grid_to_graph(grid);
    log::debug!(
        "grid {}x{}: {} nodes, {} edges",
        grid.rows(),
        grid.cols(),
        nodes.len(),
        edges.len()
    );
    WeightedGraph::from_parts(nodes, edges)
}

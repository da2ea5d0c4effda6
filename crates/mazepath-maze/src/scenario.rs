//! Parameterized entry point: build a grid, search it, render the result.

use mazepath_core::{Coord, Grid};
use mazepath_paths::{Route, ShortestPathEngine, Strategy};

use crate::adapter::build_graph;
use crate::error::ScenarioError;
use crate::render::PathRenderer;

/// A search problem on an open grid with some cells blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub rows: i32,
    pub cols: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocked: Vec<Coord>,
    pub source: Coord,
    pub target: Coord,
}

impl Scenario {
    /// The 10×10 floor plan with a walled pocket around the target.
    pub fn demo() -> Self {
        const BLOCKED: [(i32, i32); 13] = [
            (0, 3),
            (1, 3),
            (1, 2),
            (1, 1),
            (2, 1),
            (2, 0),
            (3, 1),
            (3, 2),
            (3, 3),
            (3, 4),
            (3, 5),
            (2, 5),
            (1, 5),
        ];
        Self {
            rows: 10,
            cols: 10,
            blocked: BLOCKED.iter().copied().map(Coord::from).collect(),
            source: Coord::new(6, 1),
            target: Coord::new(2, 2),
        }
    }

    /// The occupancy grid described by this scenario.
    pub fn grid(&self) -> Result<Grid, ScenarioError> {
        Ok(Grid::with_blocked(self.rows, self.cols, &self.blocked)?)
    }

    /// Build the grid and search it.
    pub fn solve(&self, strategy: Strategy) -> Result<Solution, ScenarioError> {
        solve_grid(self.grid()?, self.source, self.target, strategy)
    }
}

/// The route found on a grid, with the cells settled along the way.
#[derive(Debug, Clone)]
pub struct Solution {
    pub grid: Grid,
    pub route: Route<Coord>,
    pub explored: Vec<Coord>,
}

impl Solution {
    /// Render the grid with the route drawn over it.
    pub fn render(&self, renderer: &PathRenderer) -> String {
        renderer.render_explored(&self.grid, &self.route.path, &self.explored)
    }
}

/// Search `grid` for the shortest route from `source` to `target`.
///
/// Both endpoints must be passable cells. An unreachable target is not an
/// error; see [`Route::is_reachable`].
pub fn solve_grid(
    grid: Grid,
    source: Coord,
    target: Coord,
    strategy: Strategy,
) -> Result<Solution, ScenarioError> {
    for endpoint in [source, target] {
        if !grid.is_passable(endpoint) {
            return Err(ScenarioError::BlockedEndpoint(endpoint));
        }
    }
    let graph = build_graph(&grid)?;
    let (route, explored) = ShortestPathEngine::new(&graph)
        .with_strategy(strategy)
        .shortest_path_explored(&source, &target)?;
    log::debug!(
        "{source} -> {target}: distance {}, {} cells explored",
        route.distance,
        explored.len()
    );
    Ok(Solution {
        grid,
        route,
        explored,
    })
}

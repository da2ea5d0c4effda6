//! Perfect-maze generation with Wilson's algorithm.
//!
//! Cells with an even row and an even column form a lattice; every other
//! cell starts as a wall. Loop-erased random walks link the lattice into a
//! uniform spanning tree, and the wall cell between two linked lattice cells
//! is opened.

use mazepath_core::{Cell, Coord, Grid, GridError};
use rand::Rng;

/// Maze generator driven by a random number generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator using `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `rows × cols` perfect maze.
    ///
    /// Every open cell is reachable from every other through exactly one
    /// simple path. Odd dimensions give a maze with walls only inside;
    /// with an even dimension the last row or column is solid wall.
    ///
    /// Fails with [`GridError::InvalidSize`] for negative or oversized
    /// dimensions.
    pub fn wilson(&mut self, rows: i32, cols: i32) -> Result<Grid, GridError> {
        let mut grid = Grid::try_new(rows, cols)?;
        for r in 0..grid.rows() {
            for c in 0..grid.cols() {
                if r % 2 != 0 || c % 2 != 0 {
                    grid.set(Coord::new(r, c), Cell::BLOCKED);
                }
            }
        }

        let lattice = Lattice {
            rows: (grid.rows() + 1) / 2,
            cols: (grid.cols() + 1) / 2,
        };
        let len = lattice.len();
        if len < 2 {
            return Ok(grid);
        }

        let mut in_tree = vec![false; len];
        in_tree[0] = true;
        let mut next = vec![0usize; len];
        let mut carved = 0usize;

        for start in 1..len {
            if in_tree[start] {
                continue;
            }

            // Random walk until the tree is hit; overwriting `next` erases
            // any loops the walk made.
            let mut cur = start;
            while !in_tree[cur] {
                let nb = self.random_neighbor(&lattice, cur);
                next[cur] = nb;
                cur = nb;
            }

            // Retrace the loop-erased walk and add it to the tree.
            let mut cur = start;
            while !in_tree[cur] {
                in_tree[cur] = true;
                let nb = next[cur];
                let (a, b) = (lattice.coord(cur), lattice.coord(nb));
                grid.set(Coord::new(a.row + b.row, a.col + b.col), Cell::OPEN);
                carved += 1;
                cur = nb;
            }
        }

        log::debug!("wilson maze {rows}x{cols}: {len} lattice cells, {carved} walls opened");
        Ok(grid)
    }

    fn random_neighbor(&mut self, lattice: &Lattice, idx: usize) -> usize {
        let mut buf = [0usize; 4];
        let mut n = 0;
        for nb in lattice.coord(idx).neighbors_4() {
            if let Some(i) = lattice.idx(nb) {
                buf[n] = i;
                n += 1;
            }
        }
        buf[self.rng.random_range(0..n)]
    }
}

/// The grid of maze rooms, in lattice coordinates.
struct Lattice {
    rows: i32,
    cols: i32,
}

impl Lattice {
    fn len(&self) -> usize {
        (self.rows.max(0) * self.cols.max(0)) as usize
    }

    fn idx(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.col < 0 || c.row >= self.rows || c.col >= self.cols {
            return None;
        }
        Some((c.row * self.cols + c.col) as usize)
    }

    fn coord(&self, idx: usize) -> Coord {
        Coord::new(idx as i32 / self.cols, idx as i32 % self.cols)
    }
}

//! An integer-cell occupancy grid.
//!
//! [`Cell`] is a newtype over `i32`: the value `1` marks a blocked cell and
//! every other value is passable. [`Grid`] stores cells in row-major order.

use crate::error::GridError;
use crate::geom::Coord;

/// A map cell value, wrapping an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub i32);

impl Cell {
    /// Open floor.
    pub const OPEN: Cell = Cell(0);
    /// Wall.
    pub const BLOCKED: Cell = Cell(1);

    /// Create a new cell with the given value.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Get the underlying integer value.
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Whether a path may enter this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        self.0 != Self::BLOCKED.0
    }
}

impl From<i32> for Cell {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

impl From<Cell> for i32 {
    fn from(c: Cell) -> Self {
        c.0
    }
}

/// A 2D grid of [`Cell`] values.
///
/// Cloning copies the cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: i32,
    cols: i32,
}

impl Grid {
    /// Create a new `rows × cols` grid filled with [`Cell::OPEN`].
    /// Negative dimensions are clamped to zero.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `i32`. Use [`Grid::try_new`] for
    /// sizes that come from user input.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        match rows.checked_mul(cols) {
            Some(len) => Self {
                cells: vec![Cell::OPEN; len as usize],
                rows,
                cols,
            },
            None => panic!("grid size {rows}x{cols} overflows i32"),
        }
    }

    /// Like [`Grid::new`], but fails with [`GridError::InvalidSize`] when a
    /// dimension is negative or the cell count overflows `i32`.
    pub fn try_new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows < 0 || cols < 0 || rows.checked_mul(cols).is_none() {
            return Err(GridError::InvalidSize { rows, cols });
        }
        Ok(Self::new(rows, cols))
    }

    /// Build a grid from nested rows of raw cell values.
    ///
    /// Every row must have the same length as the first.
    pub fn from_rows<R, I>(rows: R) -> Result<Self, GridError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = i32>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut nrows = 0usize;
        for (r, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(row.into_iter().map(Cell));
            let found = cells.len() - before;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::Ragged {
                        row: r,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            nrows += 1;
        }
        Ok(Self {
            cells,
            rows: nrows as i32,
            cols: width.unwrap_or(0) as i32,
        })
    }

    /// Build an open `rows × cols` grid with the listed cells blocked.
    pub fn with_blocked(rows: i32, cols: i32, blocked: &[Coord]) -> Result<Self, GridError> {
        let mut grid = Self::try_new(rows, cols)?;
        for &coord in blocked {
            if !grid.set(coord, Cell::BLOCKED) {
                return Err(GridError::OutOfBounds { coord, rows, cols });
            }
        }
        Ok(grid)
    }

    /// Parse an ASCII map.
    ///
    /// `#` and `1` are blocked; `.`, `0` and space are open. Leading and
    /// trailing blank lines are ignored, and every line must have the same
    /// width.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.trim_matches('\n').lines().collect();
        let mut rows = Vec::with_capacity(lines.len());
        for (r, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '#' | '1' => Cell::BLOCKED,
                    '.' | '0' | ' ' => Cell::OPEN,
                    _ => {
                        return Err(GridError::InvalidChar {
                            ch,
                            pos: Coord::new(r as i32, c as i32),
                        });
                    }
                };
                row.push(cell.value());
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.row >= 0 && c.col >= 0 && c.row < self.rows && c.col < self.cols
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if self.contains(c) {
            Some((c.row * self.cols + c.col) as usize)
        } else {
            None
        }
    }

    /// Get the cell at `c`, or `None` if out of bounds.
    pub fn at(&self, c: Coord) -> Option<Cell> {
        self.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is inside the grid and passable.
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(Cell::is_passable)
    }

    /// Set the cell at `c`. Returns `false` (and does nothing) when `c` is
    /// out of bounds.
    pub fn set(&mut self, c: Coord, cell: Cell) -> bool {
        match self.index(c) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Fill the entire grid with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Count how many cells equal `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over the rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() rejects a zero size
        self.cells.chunks(self.cols.max(1) as usize)
    }

    /// Iterate over `(Coord, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coord::new(i as i32 / cols, i as i32 % cols), cell))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_json_shape() {
        let json = serde_json::to_string(&Coord::new(6, 1)).unwrap();
        assert_eq!(json, r#"{"row":6,"col":1}"#);
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Coord::new(6, 1));
    }
}

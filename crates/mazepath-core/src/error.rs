//! Errors raised while building grids or parsing coordinates.

use std::num::ParseIntError;

use thiserror::Error;

use crate::geom::Coord;

/// Errors that can occur when constructing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Rows have different lengths.
    #[error("grid: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A coordinate lies outside the grid.
    #[error("grid: {coord} is outside a {rows}x{cols} grid")]
    OutOfBounds { coord: Coord, rows: i32, cols: i32 },
    /// Map text contains a character with no cell meaning.
    #[error("map contains invalid character \u{201c}{ch}\u{201d} at {pos}")]
    InvalidChar { ch: char, pos: Coord },
    /// Negative dimensions, or a cell count that overflows `i32`.
    #[error("grid: invalid dimensions {rows}x{cols}")]
    InvalidSize { rows: i32, cols: i32 },
}

/// Errors from parsing a [`Coord`] out of `"row,col"` text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordParseError {
    #[error("expected \"row,col\", got \u{201c}{0}\u{201d}")]
    MissingSeparator(String),
    #[error("invalid coordinate \u{201c}{input}\u{201d}: {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseIntError,
    },
}

//! Grid coordinates: [`Coord`].
//!
//! Rows grow downwards and columns grow to the right, matching the row-major
//! layout of [`Grid`](crate::Grid).

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::CoordParseError;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A `(row, column)` cell position.
///
/// Ordering is row-major: rows compare first, then columns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The right-hand neighbour.
    #[inline]
    pub const fn right(self) -> Self {
        self.shift(0, 1)
    }

    /// The neighbour one row below.
    #[inline]
    pub const fn down(self) -> Self {
        self.shift(1, 0)
    }

    /// The four cardinal neighbours (up, right, down, left).
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        [
            self.shift(-1, 0),
            self.shift(0, 1),
            self.shift(1, 0),
            self.shift(0, -1),
        ]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Parses `"row,col"`, optionally wrapped in parentheses: `"(6, 1)"`.
impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim();
        let inner = inner
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(inner);
        let (row, col) = inner
            .split_once(',')
            .ok_or_else(|| CoordParseError::MissingSeparator(s.to_string()))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|source| CoordParseError::InvalidNumber {
                    input: s.to_string(),
                    source,
                })
        };
        Ok(Self::new(parse(row)?, parse(col)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn display_matches_tuple_form() {
        assert_eq!(Coord::new(6, 1).to_string(), "(6, 1)");
    }

    #[test]
    fn parse_plain_and_parenthesized() {
        assert_eq!("2,3".parse::<Coord>().unwrap(), Coord::new(2, 3));
        assert_eq!(" (6, 1) ".parse::<Coord>().unwrap(), Coord::new(6, 1));
        assert_eq!("-1,4".parse::<Coord>().unwrap(), Coord::new(-1, 4));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "23".parse::<Coord>(),
            Err(CoordParseError::MissingSeparator(_))
        ));
        assert!(matches!(
            "a,b".parse::<Coord>(),
            Err(CoordParseError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn neighbors_and_steps() {
        let c = Coord::new(3, 3);
        assert_eq!(c.right(), Coord::new(3, 4));
        assert_eq!(c.down(), Coord::new(4, 3));
        assert_eq!(
            c.neighbors_4(),
            [
                Coord::new(2, 3),
                Coord::new(3, 4),
                Coord::new(4, 3),
                Coord::new(3, 2)
            ]
        );
        assert_eq!(c + Coord::new(1, 1) - Coord::new(4, 4), Coord::ZERO);
    }
}

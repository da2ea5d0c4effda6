//! **mazepath-core**: coordinates and occupancy grids.
//!
//! This crate provides the plain data types shared across the *mazepath*
//! workspace: [`Coord`] cell positions and the [`Grid`] of integer
//! [`Cell`]s that the graph adapter and renderer operate on.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::{CoordParseError, GridError};
pub use geom::Coord;
pub use grid::{Cell, Grid};

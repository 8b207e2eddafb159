//! **jumpgrid-core** — obstacle grids for the *jumpgrid* pathfinding engine.
//!
//! This crate provides the data model shared by the search algorithms:
//! geometry primitives, the eight grid [`Direction`]s, the obstacle
//! [`Grid`] with its text format, and [`MapError`].

pub mod direction;
pub mod error;
pub mod geom;
pub mod grid;

pub use direction::Direction;
pub use error::MapError;
pub use geom::{Point, Range};
pub use grid::{Grid, MapSymbols, Node};

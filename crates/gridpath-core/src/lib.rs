//! **gridpath-core**: grid and cell types for shortest-path search.
//!
//! This crate provides the data model searched by `gridpath-search`:
//! geometry primitives, cells with terrain flags and per-run search marks,
//! movement models, and the [`Grid`] arena that owns every cell.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod movement;

pub use cell::{Cell, SearchMarks, Terrain};
pub use geom::{Point, Range};
pub use grid::{Grid, GridError};
pub use movement::Movement;

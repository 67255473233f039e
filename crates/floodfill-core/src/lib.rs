//! **floodfill-core** — core types for grid flood fill.
//!
//! This crate provides the foundational types used across the *floodfill*
//! workspace: the [`Location`] value type, the [`CellState`] encoding, the
//! bounds-checked [`Grid`] and the shared [`Error`] taxonomy.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::CellState;
pub use error::{Error, Result};
pub use geom::{Location, LocationIter};
pub use grid::Grid;

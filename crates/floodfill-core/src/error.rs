//! Error taxonomy shared by every floodfill crate.

use thiserror::Error;

use crate::geom::Location;

/// Floodfill error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("location {loc} is outside a {rows}x{cols} grid")]
    OutOfBounds {
        loc: Location,
        rows: usize,
        cols: usize,
    },

    #[error("invalid start location {0}")]
    InvalidStart(Location),

    #[error("invalid end location {0}")]
    InvalidEnd(Location),

    #[error("state matrix is {found_rows}x{found_cols}, expected {rows}x{cols}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    #[error("pop from an empty container")]
    EmptyContainer,

    #[error("unknown cell code {0}")]
    UnknownCellCode(u8),

    #[error("unknown map glyph {0:?}")]
    UnknownGlyph(char),

    #[error("blocked density {0} is not a probability in [0, 1]")]
    InvalidDensity(f64),
}

pub type Result<T> = std::result::Result<T, Error>;

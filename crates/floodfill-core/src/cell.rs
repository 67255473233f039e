//! The [`CellState`] type — what occupies a single grid cell.

use std::fmt;

use crate::error::{Error, Result};

/// State of a single grid cell.
///
/// `Start`, `End` and `Blocked` are fixed when a [`Grid`](crate::Grid) is
/// built. Traversal only ever writes `Filled`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Blocked,
    Start,
    End,
    Filled,
}

impl CellState {
    /// Every state, in code-table order.
    pub const ALL: [CellState; 5] = [
        CellState::Empty,
        CellState::Blocked,
        CellState::Start,
        CellState::End,
        CellState::Filled,
    ];

    /// Raw 8-bit code used by bitmap sources.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            CellState::Empty => 255,
            CellState::Blocked => 0,
            CellState::Start => 100,
            CellState::End => 200,
            CellState::Filled => 150,
        }
    }

    /// Decode a raw 8-bit code.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            255 => Ok(CellState::Empty),
            0 => Ok(CellState::Blocked),
            100 => Ok(CellState::Start),
            200 => Ok(CellState::End),
            150 => Ok(CellState::Filled),
            other => Err(Error::UnknownCellCode(other)),
        }
    }

    /// Single-character glyph used by text maps.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Blocked => '#',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Filled => '*',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    pub fn from_glyph(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.glyph() == ch)
    }

    /// Whether traversal may pass through this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, CellState::Blocked)
    }

    /// Start and End markers.
    #[inline]
    pub const fn is_marker(self) -> bool {
        matches!(self, CellState::Start | CellState::End)
    }
}

impl TryFrom<u8> for CellState {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(code)
    }
}

impl From<CellState> for u8 {
    fn from(s: CellState) -> Self {
        s.code()
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

use crossterm::style::Color;
use floodfill_core::CellState;

/// How one cell state is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub state: CellState,
    pub glyph: char,
    pub fg: Color,
    pub bg: Color,
}

/// Colours per state, in [`CellState::ALL`] order.
pub const PALETTE: [Swatch; 5] = [
    Swatch {
        state: CellState::Empty,
        glyph: ' ',
        fg: Color::Reset,
        bg: Color::Rgb { r: 48, g: 16, b: 96 },
    },
    Swatch {
        state: CellState::Blocked,
        glyph: '#',
        fg: Color::Rgb { r: 255, g: 224, b: 224 },
        bg: Color::Rgb { r: 200, g: 32, b: 24 },
    },
    Swatch {
        state: CellState::Start,
        glyph: 'S',
        fg: Color::Black,
        bg: Color::Rgb { r: 64, g: 200, b: 232 },
    },
    Swatch {
        state: CellState::End,
        glyph: 'E',
        fg: Color::Black,
        bg: Color::Rgb { r: 255, g: 160, b: 48 },
    },
    Swatch {
        state: CellState::Filled,
        glyph: ' ',
        fg: Color::Reset,
        bg: Color::Rgb { r: 128, g: 240, b: 120 },
    },
];

/// The swatch for `state`.
pub fn swatch(state: CellState) -> Swatch {
    PALETTE
        .iter()
        .copied()
        .find(|s| s.state == state)
        .unwrap_or(PALETTE[0])
}

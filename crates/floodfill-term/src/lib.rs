//! Terminal rendering for flood-fill runs.
//!
//! Provides a [`TermRenderer`] that implements
//! [`floodfill_paths::FillObserver`], drawing each visited cell through
//! crossterm as the engine produces it, plus a plain-text [`StepLog`]
//! observer for non-interactive output.

mod palette;
mod renderer;

pub use palette::{PALETTE, Swatch, swatch};
pub use renderer::{StepLog, TermRenderer, TerminalSession, draw_grid};

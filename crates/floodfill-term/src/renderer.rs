use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use floodfill_core::{CellState, Grid, Location};
use floodfill_paths::{FillObserver, FillOutcome, Visit};

use crate::palette::swatch;

/// Screen column/row of a grid cell. Cells are two columns wide so that
/// they render roughly square.
fn screen_pos(origin: (u16, u16), loc: Location) -> (u16, u16) {
    let x = u16::try_from(loc.col.max(0) * 2).unwrap_or(u16::MAX);
    let y = u16::try_from(loc.row.max(0)).unwrap_or(u16::MAX);
    (origin.0.saturating_add(x), origin.1.saturating_add(y))
}

fn queue_cell<W: Write>(
    out: &mut W,
    origin: (u16, u16),
    loc: Location,
    state: CellState,
) -> io::Result<()> {
    let sw = swatch(state);
    let (x, y) = screen_pos(origin, loc);
    queue!(
        out,
        cursor::MoveTo(x, y),
        SetForegroundColor(sw.fg),
        SetBackgroundColor(sw.bg),
        Print(sw.glyph),
        Print(' '),
        ResetColor
    )
}

/// Draw the whole grid with its top-left corner at `origin`.
pub fn draw_grid<W: Write>(out: &mut W, grid: &Grid, origin: (u16, u16)) -> io::Result<()> {
    for (loc, state) in grid.iter() {
        queue_cell(out, origin, loc, state)?;
    }
    let (_, bottom) = screen_pos(origin, Location::new(grid.rows() as i32, 0));
    queue!(out, cursor::MoveTo(origin.0, bottom))?;
    out.flush()
}

// ---------------------------------------------------------------------------
// TermRenderer
// ---------------------------------------------------------------------------

/// Draws each visit as the engine produces it.
///
/// Every visit is flushed before `on_visit` returns, followed by the
/// configured pause, so the screen advances in lockstep with the fill. The
/// first write error stops further drawing and is returned by
/// [`finish`](Self::finish).
pub struct TermRenderer<W: Write> {
    out: W,
    pause: Duration,
    origin: (u16, u16),
    drawn: usize,
    error: Option<io::Error>,
}

impl<W: Write> TermRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pause: Duration::ZERO,
            origin: (0, 0),
            drawn: 0,
            error: None,
        }
    }

    /// Sleep this long after drawing each visit.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Screen position of the grid's top-left cell.
    pub fn with_origin(mut self, col: u16, row: u16) -> Self {
        self.origin = (col, row);
        self
    }

    /// Number of visits drawn so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Draw `grid` in full, e.g. before the fill starts.
    pub fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        draw_grid(&mut self.out, grid, self.origin)
    }

    /// Surface the first write error, or hand back the writer.
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn record(&mut self, res: io::Result<()>) -> bool {
        if let Err(e) = res {
            log::warn!("renderer stopped drawing: {e}");
            self.error = Some(e);
            return false;
        }
        true
    }
}

impl<W: Write> FillObserver for TermRenderer<W> {
    fn on_visit(&mut self, visit: &Visit, _grid: &Grid) {
        if self.error.is_some() {
            return;
        }
        let res = queue_cell(&mut self.out, self.origin, visit.loc, visit.state)
            .and_then(|()| self.out.flush());
        if !self.record(res) {
            return;
        }
        self.drawn += 1;
        if !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
    }

    fn on_finish(&mut self, grid: &Grid, _outcome: &FillOutcome) {
        if self.error.is_some() {
            return;
        }
        let res = draw_grid(&mut self.out, grid, self.origin);
        self.record(res);
    }
}

// ---------------------------------------------------------------------------
// StepLog
// ---------------------------------------------------------------------------

/// Plain-text observer: one line per visit, then the final glyph map.
pub struct StepLog<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> StepLog<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }
}

impl<W: Write> FillObserver for StepLog<W> {
    fn on_visit(&mut self, visit: &Visit, _grid: &Grid) {
        if self.error.is_some() {
            return;
        }
        let parent = visit
            .parent
            .map_or_else(|| "-".to_string(), |p| p.to_string());
        if let Err(e) = writeln!(self.out, "{:>5} {} <- {}", visit.step, visit.loc, parent) {
            self.error = Some(e);
        }
    }

    fn on_finish(&mut self, grid: &Grid, outcome: &FillOutcome) {
        if self.error.is_some() {
            return;
        }
        let res = writeln!(self.out, "visited {} of {} cells", outcome.len(), grid.len())
            .and_then(|()| write!(self.out, "{grid}"));
        if let Err(e) = res {
            self.error = Some(e);
        }
    }
}

// ---------------------------------------------------------------------------
// TerminalSession
// ---------------------------------------------------------------------------

/// Alternate-screen session on stdout; restores the terminal when dropped.
pub struct TerminalSession {
    _priv: (),
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { _priv: () })
    }

    /// Block until a key is pressed.
    pub fn wait_for_key(&self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let res = loop {
            match event::read() {
                Ok(Event::Key(_)) => break Ok(()),
                Ok(_) => continue,
                Err(e) => break Err(e),
            }
        };
        terminal::disable_raw_mode()?;
        res
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

//! Shared driver for the floodfill demo binary.
//!
//! Settings come from an optional TOML file, then command-line overrides.
//! The grid is generated from the `[maze]` section, read from a glyph map
//! file, or decoded from a file of raw cell codes shaped by `[maze]`.

use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use floodfill_core::{Grid, Location};
use floodfill_gen::MazeConfig;
use floodfill_paths::{Discipline, FillOutcome, FloodFill};
use floodfill_term::{StepLog, TermRenderer, TerminalSession};
use serde::{Deserialize, Serialize};

/// Command-line arguments.
#[derive(Parser, Debug, Default)]
#[command(name = "floodfill", about = "Flood fill a grid from its start cell")]
pub struct Args {
    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Glyph map file (`.` empty, `#` blocked, `S` start, `E` end);
    /// replaces random generation
    #[arg(
        short,
        long,
        conflicts_with_all = ["codes", "rows", "cols", "density", "seed", "start", "end"]
    )]
    pub map: Option<PathBuf>,

    /// Raw 8-bit cell codes, row-major (e.g. one bitmap channel), shaped
    /// by rows/cols/start/end; replaces random generation
    #[arg(long, conflicts_with_all = ["density", "seed"])]
    pub codes: Option<PathBuf>,

    #[arg(long)]
    pub rows: Option<usize>,

    #[arg(long)]
    pub cols: Option<usize>,

    /// Probability that a generated cell is blocked
    #[arg(long)]
    pub density: Option<f64>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Start cell as `row,col`
    #[arg(long, value_parser = parse_location, allow_hyphen_values = true)]
    pub start: Option<Location>,

    /// End cell as `row,col`
    #[arg(long, value_parser = parse_location, allow_hyphen_values = true)]
    pub end: Option<Location>,

    /// Delay after drawing each visited cell
    #[arg(long)]
    pub pause_ms: Option<u64>,

    /// Print the visit sequence as text instead of animating
    #[arg(long)]
    pub plain: bool,

    /// Use a FIFO frontier
    #[arg(long)]
    pub breadth_first: bool,

    /// Leave the Start and End markers in place
    #[arg(long)]
    pub keep_markers: bool,
}

/// Parse `row,col`.
pub fn parse_location(s: &str) -> Result<Location, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got {s:?}"))?;
    let row = r.trim().parse().map_err(|e| format!("bad row {r:?}: {e}"))?;
    let col = c.trim().parse().map_err(|e| format!("bad col {c:?}: {e}"))?;
    Ok(Location::new(row, col))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillSettings {
    pub discipline: Discipline,
    pub keep_markers: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub pause_ms: u64,
    pub plain: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            pause_ms: 20,
            plain: false,
        }
    }
}

/// Everything the demo needs, as read from a settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub maze: MazeConfig,
    pub fill: FillSettings,
    pub render: RenderSettings,
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        let settings = Self::from_toml(&text)?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Apply command-line overrides on top of the file values.
    pub fn apply(&mut self, args: &Args) {
        let maze = &mut self.maze;
        if let Some(rows) = args.rows {
            maze.rows = rows;
        }
        if let Some(cols) = args.cols {
            maze.cols = cols;
        }
        if let Some(density) = args.density {
            maze.density = density;
        }
        if let Some(seed) = args.seed {
            maze.seed = seed;
        }
        if let Some(start) = args.start {
            maze.start = start;
        }
        if let Some(end) = args.end {
            maze.end = end;
        }
        if let Some(ms) = args.pause_ms {
            self.render.pause_ms = ms;
        }
        self.render.plain |= args.plain;
        if args.breadth_first {
            self.fill.discipline = Discipline::BreadthFirst;
        }
        self.fill.keep_markers |= args.keep_markers;
    }

    pub fn flood_fill(&self) -> FloodFill {
        FloodFill::new()
            .with_discipline(self.fill.discipline)
            .keep_markers(self.fill.keep_markers)
    }
}

/// Where the grid comes from.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GridSource {
    /// Random grid from the `[maze]` settings.
    #[default]
    Generate,
    /// Glyph map text; carries its own shape and markers.
    Map(String),
    /// Raw cell codes laid out by the `[maze]` shape and markers.
    Codes(Vec<u8>),
}

impl GridSource {
    /// Read the source named on the command line.
    pub fn from_args(args: &Args) -> io::Result<Self> {
        if let Some(path) = &args.map {
            return fs::read_to_string(path).map(Self::Map);
        }
        if let Some(path) = &args.codes {
            return fs::read(path).map(Self::Codes);
        }
        Ok(Self::Generate)
    }
}

/// Build the grid from `source`.
pub fn build_grid(settings: &Settings, source: &GridSource) -> floodfill_core::Result<Grid> {
    match source {
        GridSource::Generate => settings.maze.generate(),
        GridSource::Map(text) => {
            log::debug!("glyph map given, [maze] settings unused");
            Grid::parse(text)
        }
        GridSource::Codes(codes) => {
            log::debug!("{} raw cell codes given, density and seed unused", codes.len());
            settings.maze.with_codes(codes)
        }
    }
}

/// Fill `grid`, writing the visit log and final map to `out`.
pub fn run_plain<W: Write>(
    settings: &Settings,
    grid: &mut Grid,
    out: W,
) -> Result<FillOutcome, Box<dyn Error>> {
    let start = grid.start();
    let mut step_log = StepLog::new(out);
    let outcome = settings.flood_fill().run_with(grid, start, &mut step_log)?;
    step_log.finish()?;
    Ok(outcome)
}

fn run_animated(settings: &Settings, grid: &mut Grid) -> Result<FillOutcome, Box<dyn Error>> {
    let session = TerminalSession::enter()?;
    let start = grid.start();
    let mut renderer = TermRenderer::new(io::stdout())
        .with_pause(Duration::from_millis(settings.render.pause_ms));
    renderer.draw(grid)?;
    let outcome = settings.flood_fill().run_with(grid, start, &mut renderer)?;
    let mut stdout = renderer.finish()?;
    writeln!(
        stdout,
        "visited {} of {} cells, end reached: {}. Press any key.",
        outcome.len(),
        grid.len(),
        outcome.reached_end()
    )?;
    stdout.flush()?;
    session.wait_for_key()?;
    Ok(outcome)
}

/// Entry point for the `floodfill` binary.
pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    settings.apply(args);

    let source = GridSource::from_args(args)?;
    let mut grid = build_grid(&settings, &source)?;
    log::info!(
        "{}x{} grid, start {}, end {}",
        grid.rows(),
        grid.cols(),
        grid.start(),
        grid.end()
    );

    let outcome = if settings.render.plain {
        run_plain(&settings, &mut grid, io::stdout().lock())?
    } else {
        run_animated(&settings, &mut grid)?
    };
    log::info!(
        "visited {} cells, end reached: {}",
        outcome.len(),
        outcome.reached_end()
    );
    Ok(())
}

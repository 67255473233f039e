//! Grid construction parameters.

use floodfill_core::{CellState, Grid, Location, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::mapgen::MapGen;

/// Everything needed to build a [`Grid`].
///
/// With the `serde` feature every field is optional on input and falls back
/// to [`MazeConfig::default`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Probability in `[0, 1]` that a generated cell is Blocked.
    pub density: f64,
    pub seed: u64,
    pub start: Location,
    pub end: Location,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            cols: 10,
            density: 0.2,
            seed: 365,
            start: Location::new(0, 0),
            end: Location::new(9, 9),
        }
    }
}

impl MazeConfig {
    /// Generate a random grid from `seed` and `density`.
    ///
    /// The same config always yields the same grid.
    pub fn generate(&self) -> Result<Grid> {
        let mut mg = MapGen::new(StdRng::seed_from_u64(self.seed));
        mg.generate(self)
    }

    /// Use an externally supplied state matrix instead of generating one.
    /// `density` and `seed` are ignored.
    pub fn with_matrix(&self, matrix: Vec<Vec<CellState>>) -> Result<Grid> {
        Grid::from_matrix(self.rows, self.cols, matrix, self.start, self.end)
    }

    /// Use raw row-major 8-bit codes (e.g. one bitmap channel) instead of
    /// generating.
    pub fn with_codes(&self, codes: &[u8]) -> Result<Grid> {
        Grid::from_codes(self.rows, self.cols, codes, self.start, self.end)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = MazeConfig {
            rows: 12,
            cols: 8,
            density: 0.3,
            seed: 99,
            start: Location::new(1, 1),
            end: Location::new(11, 7),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: MazeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: MazeConfig = serde_json::from_str(r#"{"rows": 4, "seed": 1}"#).unwrap();
        assert_eq!(cfg.rows, 4);
        assert_eq!(cfg.seed, 1);
        assert_eq!(cfg.cols, 10);
        assert_eq!(cfg.density, 0.2);
    }
}

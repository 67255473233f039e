//! Random grid generation.
//!
//! Each cell is independently Blocked with probability `density`, otherwise
//! Empty. The start and end cells are then forced to their markers by
//! [`Grid::from_cells`], so they are always traversable.

use floodfill_core::{CellState, Error, Grid, Result};
use rand::{Rng, RngExt};

use crate::config::MazeConfig;

/// Map generator driven by a caller-supplied RNG.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw `rows * cols` row-major cells, each Blocked with probability
    /// `density`.
    pub fn random_cells(&mut self, rows: usize, cols: usize, density: f64) -> Result<Vec<CellState>> {
        if !(0.0..=1.0).contains(&density) {
            return Err(Error::InvalidDensity(density));
        }
        let cells = (0..rows * cols)
            .map(|_| {
                if self.rng.random_bool(density) {
                    CellState::Blocked
                } else {
                    CellState::Empty
                }
            })
            .collect();
        Ok(cells)
    }

    /// Generate a grid with the dimensions, density and markers of `cfg`.
    /// `cfg.seed` is not consulted; the generator's own RNG is used.
    pub fn generate(&mut self, cfg: &MazeConfig) -> Result<Grid> {
        let cells = self.random_cells(cfg.rows, cfg.cols, cfg.density)?;
        let grid = Grid::from_cells(cfg.rows, cfg.cols, cells, cfg.start, cfg.end)?;
        log::debug!(
            "generated {}x{} grid (density {}, seed {}): {} blocked",
            cfg.rows,
            cfg.cols,
            cfg.density,
            cfg.seed,
            grid.count(CellState::Blocked)
        );
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floodfill_core::Location;
    use floodfill_paths::{Discipline, FloodFill, neighbors};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn config(rows: usize, cols: usize, density: f64, seed: u64) -> MazeConfig {
        MazeConfig {
            rows,
            cols,
            density,
            seed,
            start: Location::new(0, 0),
            end: Location::new(rows as i32 - 1, cols as i32 - 1),
        }
    }

    /// Reachable set by repeated relaxation until nothing changes.
    fn reachable(grid: &Grid, start: Location) -> HashSet<Location> {
        let mut set = HashSet::from([start]);
        loop {
            let before = set.len();
            for (loc, state) in grid.iter() {
                if !state.is_passable() || set.contains(&loc) {
                    continue;
                }
                let touches = [(1, 0), (-1, 0), (0, 1), (0, -1)]
                    .iter()
                    .any(|&(dr, dc)| set.contains(&loc.shift(dr, dc)));
                if touches {
                    set.insert(loc);
                }
            }
            if set.len() == before {
                return set;
            }
        }
    }

    #[test]
    fn density_extremes() {
        let mut mg = MapGen::new(StdRng::seed_from_u64(1));
        let all_blocked = mg.random_cells(4, 5, 1.0).unwrap();
        assert!(all_blocked.iter().all(|&c| c == CellState::Blocked));
        let none_blocked = mg.random_cells(4, 5, 0.0).unwrap();
        assert!(none_blocked.iter().all(|&c| c == CellState::Empty));
        assert_eq!(none_blocked.len(), 20);
    }

    #[test]
    fn density_out_of_range() {
        let mut mg = MapGen::new(StdRng::seed_from_u64(1));
        assert_eq!(mg.random_cells(2, 2, 1.5), Err(Error::InvalidDensity(1.5)));
        assert_eq!(mg.random_cells(2, 2, -0.1), Err(Error::InvalidDensity(-0.1)));
        assert!(mg.random_cells(2, 2, f64::NAN).is_err());
    }

    #[test]
    fn density_is_roughly_respected() {
        let mut mg = MapGen::new(StdRng::seed_from_u64(42));
        let cells = mg.random_cells(100, 100, 0.3).unwrap();
        let blocked = cells.iter().filter(|&&c| c == CellState::Blocked).count();
        assert!((2500..3500).contains(&blocked), "blocked = {blocked}");
    }

    #[test]
    fn fully_blocked_grid_keeps_markers() {
        let g = config(3, 3, 1.0, 5).generate().unwrap();
        assert_eq!(g.get(Location::new(0, 0)), Ok(CellState::Start));
        assert_eq!(g.get(Location::new(2, 2)), Ok(CellState::End));
        assert_eq!(g.count(CellState::Blocked), 7);

        let mut g = g;
        let outcome = FloodFill::new().run(&mut g, Location::new(0, 0)).unwrap();
        assert_eq!(outcome.sequence(), vec![Location::new(0, 0)]);
    }

    #[test]
    fn open_grid_fills_every_cell() {
        for (rows, cols) in [(1, 1), (1, 9), (7, 1), (8, 13)] {
            let mut g = config(rows, cols, 0.0, 3).generate().unwrap();
            let outcome = FloodFill::new().run(&mut g, Location::new(0, 0)).unwrap();
            let all: HashSet<_> = g.locations().collect();
            let visited: HashSet<_> = outcome.visited().iter().collect();
            assert_eq!(visited, all);
            assert_eq!(outcome.len(), rows * cols);
        }
    }

    #[test]
    fn fill_matches_reachability() {
        for seed in 0..40 {
            for density in [0.1, 0.3, 0.45, 0.6] {
                let cfg = config(15, 17, density, seed);
                let mut grid = cfg.generate().unwrap();
                let expected = reachable(&grid, cfg.start);

                for discipline in [Discipline::DepthFirst, Discipline::BreadthFirst] {
                    let mut g = grid.clone();
                    let outcome = FloodFill::new()
                        .with_discipline(discipline)
                        .run(&mut g, cfg.start)
                        .unwrap();
                    let visited: HashSet<_> = outcome.visited().iter().collect();
                    assert_eq!(visited, expected, "seed {seed}, density {density}");
                    assert_eq!(outcome.len(), expected.len());
                    assert!(outcome.len() <= g.len());
                    for loc in g.locations() {
                        let filled = g.get(loc) == Ok(CellState::Filled);
                        assert_eq!(filled, expected.contains(&loc));
                    }
                }

                // Identical content and start give identical sequences.
                let mut again = grid.clone();
                let a = FloodFill::new().run(&mut grid, cfg.start).unwrap();
                let b = FloodFill::new().run(&mut again, cfg.start).unwrap();
                assert_eq!(a.sequence(), b.sequence());
            }
        }
    }

    #[test]
    fn parent_paths_are_connected() {
        for seed in 0..10 {
            let cfg = config(12, 12, 0.3, seed);
            let mut grid = cfg.generate().unwrap();
            let outcome = FloodFill::new().run(&mut grid, cfg.start).unwrap();
            for loc in outcome.sequence() {
                let path = outcome.path_to(loc).unwrap();
                assert_eq!(path.first(), Some(&cfg.start));
                assert_eq!(path.last(), Some(&loc));
                for w in path.windows(2) {
                    assert_eq!(w[0].manhattan(w[1]), 1);
                }
            }
        }
    }

    #[test]
    fn adjacency_is_idempotent_on_generated_grids() {
        let grid = config(10, 10, 0.4, 11).generate().unwrap();
        for loc in grid.locations() {
            assert_eq!(neighbors(&grid, loc), neighbors(&grid, loc));
        }
    }
}

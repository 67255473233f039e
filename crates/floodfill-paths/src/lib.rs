//! Flood fill over 4-connected grids.
//!
//! This crate drives an iterative (non-recursive) traversal of every cell
//! reachable from a start location:
//!
//! - **Frontier** containers with an explicit discipline ([`Stack`] for
//!   depth-first fill, [`Queue`] for the breadth-first alternate mode)
//! - the cardinal **adjacency rule** ([`Cardinal`]), pluggable through
//!   [`Adjacency`]
//! - the **engine** ([`FloodFill`]), available eagerly ([`FloodFill::run`]),
//!   with a lockstep observer ([`FloodFill::run_with`]) or as a lazy
//!   iterator ([`FloodFill::steps`])
//!
//! The frontier is LIFO by default. That is what makes the fill
//! depth-first; swapping in a FIFO frontier turns it into a breadth-first
//! fill and changes the visit order.
//!
//! ```
//! use floodfill_core::{Grid, Location};
//! use floodfill_paths::FloodFill;
//!
//! let mut grid = Grid::parse("S.#\n.#.\n..E").unwrap();
//! let outcome = FloodFill::new().run(&mut grid, Location::new(0, 0)).unwrap();
//! assert_eq!(outcome.len(), 7);
//! assert!(outcome.reached_end());
//! ```

mod fill;
mod frontier;
mod neighbors;
mod outcome;
mod traits;

pub use fill::{FillObserver, FillSteps, FloodFill, Node};
pub use frontier::{Discipline, Frontier, OrderedContainer, Queue, Stack};
pub use neighbors::{Cardinal, neighbors};
pub use outcome::{FillOutcome, Visit, VisitedSet};
pub use traits::Adjacency;

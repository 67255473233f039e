//! The flood-fill engine.

use std::collections::HashMap;

use floodfill_core::{CellState, Error, Grid, Location, Result};

use crate::frontier::{Discipline, Frontier, OrderedContainer};
use crate::neighbors::Cardinal;
use crate::outcome::{FillOutcome, Visit, VisitedSet};
use crate::traits::Adjacency;

/// A frontier entry: a cell to visit and the cell that discovered it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub loc: Location,
    pub parent: Option<Location>,
}

/// Receives every visit while a fill runs.
///
/// Calls are synchronous: the engine does not pop the next cell until
/// `on_visit` returns, so observers see the grid in lockstep with the
/// traversal.
pub trait FillObserver {
    /// Called after `visit.loc` has been written to `grid`.
    fn on_visit(&mut self, visit: &Visit, grid: &Grid);

    /// Called once with the final grid after the frontier is exhausted.
    fn on_finish(&mut self, _grid: &Grid, _outcome: &FillOutcome) {}
}

impl<F: FnMut(&Visit, &Grid)> FillObserver for F {
    fn on_visit(&mut self, visit: &Visit, grid: &Grid) {
        self(visit, grid)
    }
}

/// Stack-based flood fill.
///
/// Floods the entire 4-connected passable region around the start cell.
/// There is no goal test: reaching the End cell does not stop the fill.
#[derive(Clone, Debug, Default)]
pub struct FloodFill<A: Adjacency = Cardinal> {
    adjacency: A,
    discipline: Discipline,
    keep_markers: bool,
}

impl FloodFill {
    /// Depth-first fill with the cardinal adjacency rule.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: Adjacency> FloodFill<A> {
    /// Replace the adjacency rule.
    pub fn with_adjacency<B: Adjacency>(self, adjacency: B) -> FloodFill<B> {
        FloodFill {
            adjacency,
            discipline: self.discipline,
            keep_markers: self.keep_markers,
        }
    }

    /// Select the frontier discipline. [`Discipline::DepthFirst`] by
    /// default.
    pub fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = discipline;
        self
    }

    /// When `true`, visited Start and End cells keep their marker instead
    /// of being overwritten with Filled.
    pub fn keep_markers(mut self, keep: bool) -> Self {
        self.keep_markers = keep;
        self
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// Fill every cell reachable from `start`, writing the grid in place.
    pub fn run(&self, grid: &mut Grid, start: Location) -> Result<FillOutcome> {
        self.run_with(grid, start, &mut |_: &Visit, _: &Grid| {})
    }

    /// Like [`run`](Self::run), reporting each visit to `observer` as it
    /// happens and the final grid once done.
    pub fn run_with<O: FillObserver + ?Sized>(
        &self,
        grid: &mut Grid,
        start: Location,
        observer: &mut O,
    ) -> Result<FillOutcome> {
        let mut steps = self.steps(grid, start)?;
        while let Some(visit) = steps.next() {
            observer.on_visit(&visit, steps.grid());
        }
        let outcome = steps.finish();
        observer.on_finish(grid, &outcome);
        Ok(outcome)
    }

    /// Lazy form of [`run`](Self::run): each call to `next` pops and visits
    /// one cell. Dropping the iterator stops the fill where it is.
    pub fn steps<'a>(&'a self, grid: &'a mut Grid, start: Location) -> Result<FillSteps<'a, A>> {
        if !grid.contains(start) {
            return Err(Error::InvalidStart(start));
        }
        log::debug!(
            "flood fill from {} on {}x{} grid ({:?})",
            start,
            grid.rows(),
            grid.cols(),
            self.discipline
        );

        let mut frontier = Frontier::new(self.discipline);
        let mut visited = VisitedSet::new();
        visited.insert(start);
        frontier.push(Node {
            loc: start,
            parent: None,
        });

        Ok(FillSteps {
            adjacency: &self.adjacency,
            keep_markers: self.keep_markers,
            grid,
            start,
            frontier,
            visited,
            parents: HashMap::new(),
            visits: Vec::new(),
            nbuf: Vec::with_capacity(4),
        })
    }
}

/// In-progress fill returned by [`FloodFill::steps`].
pub struct FillSteps<'a, A: Adjacency = Cardinal> {
    adjacency: &'a A,
    keep_markers: bool,
    grid: &'a mut Grid,
    start: Location,
    frontier: Frontier<Node>,
    visited: VisitedSet,
    parents: HashMap<Location, Location>,
    visits: Vec<Visit>,
    // scratch buffer for neighbour queries
    nbuf: Vec<Location>,
}

impl<A: Adjacency> FillSteps<'_, A> {
    /// The grid as written so far.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Locations pushed so far, including those still on the frontier.
    #[inline]
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Number of cells waiting on the frontier.
    #[inline]
    pub fn pending(&self) -> usize {
        self.frontier.len()
    }

    /// Run to completion and collect every visit, including those already
    /// yielded.
    pub fn finish(mut self) -> FillOutcome {
        while self.next().is_some() {}
        log::debug!(
            "flood fill from {} visited {} cells",
            self.start,
            self.visits.len()
        );
        FillOutcome {
            start: self.start,
            end: self.grid.end(),
            visits: self.visits,
            visited: self.visited,
            parents: self.parents,
        }
    }
}

impl<A: Adjacency> Iterator for FillSteps<'_, A> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        let Ok(Node { loc, parent }) = self.frontier.pop() else {
            return None;
        };

        let state = match self.grid.get(loc) {
            Ok(s) if self.keep_markers && s.is_marker() => s,
            _ => CellState::Filled,
        };
        self.grid.set(loc, state).ok()?;

        let visit = Visit {
            step: self.visits.len(),
            loc,
            parent,
            state,
        };
        self.visits.push(visit);
        log::trace!("visit #{} {}", visit.step, loc);

        self.nbuf.clear();
        self.adjacency.neighbors(&*self.grid, loc, &mut self.nbuf);
        for &n in &self.nbuf {
            if self.visited.insert(n) {
                self.parents.insert(n, loc);
                self.frontier.push(Node {
                    loc: n,
                    parent: Some(loc),
                });
            }
        }

        Some(visit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.grid.len();
        (self.frontier.len(), Some(len.saturating_sub(self.visits.len())))
    }
}

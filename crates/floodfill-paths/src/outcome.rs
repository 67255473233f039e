use std::collections::{HashMap, HashSet};

use floodfill_core::{CellState, Location};

/// One popped cell, in the order the engine processed it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visit {
    /// Zero-based position in the visit sequence.
    pub step: usize,
    pub loc: Location,
    /// The cell whose expansion pushed `loc`; `None` for the start cell.
    pub parent: Option<Location>,
    /// State written to the grid for this cell.
    pub state: CellState,
}

/// Locations already pushed onto the frontier during one run.
///
/// Only grows; membership and insertion are the only operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitedSet {
    set: HashSet<Location>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `loc`. Returns `true` if it was not present.
    #[inline]
    pub fn insert(&mut self, loc: Location) -> bool {
        self.set.insert(loc)
    }

    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        self.set.contains(&loc)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Unordered iterator over the members.
    pub fn iter(&self) -> impl Iterator<Item = Location> + '_ {
        self.set.iter().copied()
    }
}

/// Result of a completed (or drained) fill.
#[derive(Clone, Debug)]
pub struct FillOutcome {
    pub(crate) start: Location,
    pub(crate) end: Location,
    pub(crate) visits: Vec<Visit>,
    pub(crate) visited: VisitedSet,
    pub(crate) parents: HashMap<Location, Location>,
}

impl FillOutcome {
    /// The location the fill started from.
    #[inline]
    pub fn start(&self) -> Location {
        self.start
    }

    /// Every visit, in order.
    #[inline]
    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    /// The visited locations, in order.
    pub fn sequence(&self) -> Vec<Location> {
        self.visits.iter().map(|v| v.loc).collect()
    }

    #[inline]
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Number of cells visited.
    #[inline]
    pub fn len(&self) -> usize {
        self.visits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        self.visited.contains(loc)
    }

    /// Whether the grid's End cell lies in the filled region.
    #[inline]
    pub fn reached_end(&self) -> bool {
        self.visited.contains(self.end)
    }

    /// Walk the parent links from `target` back to the start.
    ///
    /// The path follows the fill tree, so it is a valid 4-connected walk
    /// but not necessarily a shortest one. Returns `None` if `target` was
    /// not reached.
    pub fn path_to(&self, target: Location) -> Option<Vec<Location>> {
        if !self.visited.contains(target) {
            return None;
        }
        let mut path = vec![target];
        let mut cur = target;
        while cur != self.start {
            cur = *self.parents.get(&cur)?;
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }
}

use floodfill_core::{Grid, Location};

use crate::traits::Adjacency;

/// The 4-connected adjacency rule.
///
/// Candidates are produced in a fixed order: down, up, right, left. A
/// candidate is kept iff it is inside the grid and not Blocked. The order
/// determines the visit sequence, so it is part of the contract.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cardinal;

impl Cardinal {
    /// Offsets in visiting order: down, up, right, left.
    pub const DIRS: [Location; 4] = [
        Location::new(1, 0),
        Location::new(-1, 0),
        Location::new(0, 1),
        Location::new(0, -1),
    ];
}

impl Adjacency for Cardinal {
    fn neighbors(&self, grid: &Grid, loc: Location, buf: &mut Vec<Location>) {
        for d in Self::DIRS {
            let n = loc + d;
            if grid.get(n).is_ok_and(|s| s.is_passable()) {
                buf.push(n);
            }
        }
    }
}

/// Passable in-bounds cardinal neighbours of `loc`, in [`Cardinal`] order.
pub fn neighbors(grid: &Grid, loc: Location) -> Vec<Location> {
    let mut buf = Vec::with_capacity(4);
    Cardinal.neighbors(grid, loc, &mut buf);
    buf
}

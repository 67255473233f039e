use floodfill_core::{Grid, Location};

/// Neighbour enumeration used by the fill engine.
///
/// Implementations read the grid at call time, so they see every state the
/// engine has already written.
pub trait Adjacency {
    /// Append the neighbours of `loc` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, grid: &Grid, loc: Location, buf: &mut Vec<Location>);
}

impl<A: Adjacency + ?Sized> Adjacency for &A {
    fn neighbors(&self, grid: &Grid, loc: Location, buf: &mut Vec<Location>) {
        (**self).neighbors(grid, loc, buf)
    }
}

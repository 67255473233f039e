//! Geometry primitives: [`Location`] and a row-major [`LocationIter`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A `(row, col)` grid coordinate. Rows grow down, columns grow right.
///
/// Coordinates are signed so that neighbour arithmetic can step off the
/// grid edge; bounds are enforced by [`Grid`](crate::Grid).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub row: i32,
    pub col: i32,
}

impl Location {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new location.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a location shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether the location lies in `[0, rows) x [0, cols)`.
    #[inline]
    pub fn within(self, rows: usize, cols: usize) -> bool {
        self.row >= 0
            && self.col >= 0
            && (self.row as usize) < rows
            && (self.col as usize) < cols
    }

    /// Manhattan distance between two locations.
    #[inline]
    pub fn manhattan(self, other: Location) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Location {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Location {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Location {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Location {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// LocationIter
// ---------------------------------------------------------------------------

/// Row-major iterator over every location of a `rows x cols` rectangle.
#[derive(Clone, Debug)]
pub struct LocationIter {
    cols: usize,
    total: usize,
    next: usize,
}

impl LocationIter {
    /// Iterate over `[0, rows) x [0, cols)`. The cell count saturates at
    /// `usize::MAX` rather than overflowing.
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            total: rows.saturating_mul(cols),
            next: 0,
        }
    }
}

impl Iterator for LocationIter {
    type Item = Location;

    #[inline]
    fn next(&mut self) -> Option<Location> {
        if self.next >= self.total {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some(Location::new((i / self.cols) as i32, (i % self.cols) as i32))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for LocationIter {}

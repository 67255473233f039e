//! The [`Grid`] type — a fixed-size 2D array of [`CellState`]s.
//!
//! A `Grid` owns its cells exclusively and never changes shape. Every
//! accessor is bounds-checked and reports [`Error::OutOfBounds`] instead of
//! clamping.

use std::fmt;

use crate::cell::CellState;
use crate::error::{Error, Result};
use crate::geom::{Location, LocationIter};

/// A rectangular grid of [`CellState`]s with one Start and one End cell.
///
/// With the `serde` feature, deserialization runs the same shape, bounds
/// and marker checks as [`Grid::from_cells`] but keeps the stored states,
/// so a filled grid round-trips unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGrid")
)]
pub struct Grid {
    cells: Vec<CellState>,
    rows: usize,
    cols: usize,
    start: Location,
    end: Location,
}

/// Shape, bounds and marker checks shared by every constructor.
///
/// A Start cell anywhere but `start` (or End anywhere but `end`) is a
/// second marker; a marker sitting on the other designated cell is allowed
/// since forcing overwrites it.
fn check_cells(
    rows: usize,
    cols: usize,
    cells: &[CellState],
    start: Location,
    end: Location,
) -> Result<()> {
    if rows.checked_mul(cols) != Some(cells.len()) {
        return Err(Error::DimensionMismatch {
            rows,
            cols,
            found_rows: 1,
            found_cols: cells.len(),
        });
    }
    if !start.within(rows, cols) {
        return Err(Error::InvalidStart(start));
    }
    if !end.within(rows, cols) {
        return Err(Error::InvalidEnd(end));
    }
    let designated = |loc: Location| loc == start || loc == end;
    for (loc, &state) in LocationIter::new(rows, cols).zip(cells) {
        match state {
            CellState::Start if !designated(loc) => return Err(Error::InvalidStart(loc)),
            CellState::End if !designated(loc) => return Err(Error::InvalidEnd(loc)),
            _ => {}
        }
    }
    Ok(())
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    cells: Vec<CellState>,
    rows: usize,
    cols: usize,
    start: Location,
    end: Location,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = Error;

    fn try_from(raw: RawGrid) -> Result<Self> {
        check_cells(raw.rows, raw.cols, &raw.cells, raw.start, raw.end)?;
        Ok(Self {
            cells: raw.cells,
            rows: raw.rows,
            cols: raw.cols,
            start: raw.start,
            end: raw.end,
        })
    }
}

impl Grid {
    /// Build a grid from a flat row-major cell vector.
    ///
    /// Checks run in order: dimensions, start, end, stray markers. The
    /// start and end cells are then forced to [`CellState::Start`] /
    /// [`CellState::End`], overriding whatever was there (a Blocked start
    /// becomes traversable). If `start == end` the cell ends up as End.
    pub fn from_cells(
        rows: usize,
        cols: usize,
        cells: Vec<CellState>,
        start: Location,
        end: Location,
    ) -> Result<Self> {
        check_cells(rows, cols, &cells, start, end)?;
        let mut grid = Self {
            cells,
            rows,
            cols,
            start,
            end,
        };
        let si = grid.index(start)?;
        grid.cells[si] = CellState::Start;
        let ei = grid.index(end)?;
        grid.cells[ei] = CellState::End;
        Ok(grid)
    }

    /// Build a grid from an externally supplied state matrix (one `Vec` per
    /// row). The matrix must be exactly `rows x cols`.
    pub fn from_matrix(
        rows: usize,
        cols: usize,
        matrix: Vec<Vec<CellState>>,
        start: Location,
        end: Location,
    ) -> Result<Self> {
        if matrix.len() != rows {
            let found_cols = matrix.first().map_or(0, Vec::len);
            return Err(Error::DimensionMismatch {
                rows,
                cols,
                found_rows: matrix.len(),
                found_cols,
            });
        }
        if let Some(row) = matrix.iter().find(|r| r.len() != cols) {
            return Err(Error::DimensionMismatch {
                rows,
                cols,
                found_rows: matrix.len(),
                found_cols: row.len(),
            });
        }
        let cells = matrix.into_iter().flatten().collect();
        Self::from_cells(rows, cols, cells, start, end)
    }

    /// Build a grid from raw row-major 8-bit codes (see
    /// [`CellState::code`]), e.g. one channel of a bitmap.
    pub fn from_codes(
        rows: usize,
        cols: usize,
        codes: &[u8],
        start: Location,
        end: Location,
    ) -> Result<Self> {
        let cells = codes
            .iter()
            .map(|&c| CellState::from_code(c))
            .collect::<Result<Vec<_>>>()?;
        Self::from_cells(rows, cols, cells, start, end)
    }

    /// A grid with no Blocked cells.
    pub fn open(rows: usize, cols: usize, start: Location, end: Location) -> Result<Self> {
        let len = rows.checked_mul(cols).ok_or(Error::DimensionMismatch {
            rows,
            cols,
            found_rows: 0,
            found_cols: 0,
        })?;
        Self::from_cells(rows, cols, vec![CellState::Empty; len], start, end)
    }

    /// Parse a text map, one line per row, using [`CellState::glyph`]
    /// characters. Leading and trailing blank lines are ignored; a blank
    /// line inside the map is a [`Error::DimensionMismatch`].
    ///
    /// Exactly one `S` and one `E` are required; a missing marker is
    /// reported at `(-1, -1)`, a duplicate at its second occurrence.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines: Vec<&str> = text.lines().map(str::trim_end).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let first = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
        let lines = &lines[first..];
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());

        let mut matrix = Vec::with_capacity(rows);
        let mut start = None;
        let mut end = None;
        for (r, line) in lines.iter().enumerate() {
            let mut row = Vec::with_capacity(cols);
            for (c, ch) in line.chars().enumerate() {
                let state = CellState::from_glyph(ch).ok_or(Error::UnknownGlyph(ch))?;
                let loc = Location::new(r as i32, c as i32);
                match state {
                    CellState::Start if start.replace(loc).is_some() => {
                        return Err(Error::InvalidStart(loc));
                    }
                    CellState::End if end.replace(loc).is_some() => {
                        return Err(Error::InvalidEnd(loc));
                    }
                    _ => {}
                }
                row.push(state);
            }
            matrix.push(row);
        }

        let missing = Location::new(-1, -1);
        Self::from_matrix(
            rows,
            cols,
            matrix,
            start.unwrap_or(missing),
            end.unwrap_or(missing),
        )
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The designated start location.
    #[inline]
    pub fn start(&self) -> Location {
        self.start
    }

    /// The designated end location.
    #[inline]
    pub fn end(&self) -> Location {
        self.end
    }

    /// Whether `loc` is inside `[0, rows) x [0, cols)`.
    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        loc.within(self.rows, self.cols)
    }

    #[inline]
    fn index(&self, loc: Location) -> Result<usize> {
        if !self.contains(loc) {
            return Err(Error::OutOfBounds {
                loc,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(loc.row as usize * self.cols + loc.col as usize)
    }

    /// Read the state at `loc`.
    pub fn get(&self, loc: Location) -> Result<CellState> {
        let i = self.index(loc)?;
        Ok(self.cells[i])
    }

    /// Write the state at `loc`.
    pub fn set(&mut self, loc: Location, state: CellState) -> Result<()> {
        let i = self.index(loc)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Count how many cells hold `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Row-major iterator over every location.
    #[inline]
    pub fn locations(&self) -> LocationIter {
        LocationIter::new(self.rows, self.cols)
    }

    /// Row-major iterator over `(Location, CellState)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Location, CellState)> + '_ {
        self.locations().zip(self.cells.iter().copied())
    }

    /// Row-major view of the raw cells.
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Copy the cells out as one `Vec` per row.
    pub fn to_matrix(&self) -> Vec<Vec<CellState>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells.chunks(self.cols).map(<[_]>::to_vec).collect()
    }

    /// Encode the cells as raw row-major 8-bit codes.
    pub fn to_codes(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.code()).collect()
    }
}

impl fmt::Display for Grid {
    /// Glyph map, one line per row; parses back with [`Grid::parse`] while
    /// the Start and End markers are intact.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            for c in row {
                write!(f, "{}", c.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: i32, col: i32) -> Location {
        Location::new(row, col)
    }

    #[test]
    fn open_grid_and_get() {
        let g = Grid::open(3, 4, loc(0, 0), loc(2, 3)).unwrap();
        assert_eq!(g.dimensions(), (3, 4));
        assert_eq!(g.len(), 12);
        assert_eq!(g.get(loc(0, 0)), Ok(CellState::Start));
        assert_eq!(g.get(loc(2, 3)), Ok(CellState::End));
        assert_eq!(g.get(loc(1, 1)), Ok(CellState::Empty));
        assert_eq!(g.count(CellState::Empty), 10);
    }

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut g = Grid::open(2, 2, loc(0, 0), loc(1, 1)).unwrap();
        let err = Error::OutOfBounds {
            loc: loc(2, 0),
            rows: 2,
            cols: 2,
        };
        assert_eq!(g.get(loc(2, 0)), Err(err.clone()));
        assert_eq!(g.set(loc(2, 0), CellState::Blocked), Err(err));
        assert!(g.get(loc(0, -1)).is_err());
        g.set(loc(0, 1), CellState::Blocked).unwrap();
        assert_eq!(g.get(loc(0, 1)), Ok(CellState::Blocked));
    }

    #[test]
    fn markers_override_supplied_states() {
        let matrix = vec![vec![CellState::Blocked; 2]; 2];
        let g = Grid::from_matrix(2, 2, matrix, loc(0, 0), loc(1, 1)).unwrap();
        assert_eq!(g.get(loc(0, 0)), Ok(CellState::Start));
        assert_eq!(g.get(loc(1, 1)), Ok(CellState::End));
        assert_eq!(g.count(CellState::Blocked), 2);
    }

    #[test]
    fn coinciding_start_and_end_keeps_end() {
        let g = Grid::open(2, 2, loc(1, 0), loc(1, 0)).unwrap();
        assert_eq!(g.get(loc(1, 0)), Ok(CellState::End));
        assert_eq!(g.count(CellState::Start), 0);
    }

    #[test]
    fn out_of_bounds_start_and_end_fail() {
        assert_eq!(
            Grid::open(5, 5, loc(-1, 0), loc(4, 4)),
            Err(Error::InvalidStart(loc(-1, 0)))
        );
        assert_eq!(
            Grid::open(5, 5, loc(0, 0), loc(4, 5)),
            Err(Error::InvalidEnd(loc(4, 5)))
        );
    }

    #[test]
    fn dimension_mismatch() {
        let short = vec![vec![CellState::Empty; 3]; 2];
        assert_eq!(
            Grid::from_matrix(3, 3, short, loc(0, 0), loc(1, 1)),
            Err(Error::DimensionMismatch {
                rows: 3,
                cols: 3,
                found_rows: 2,
                found_cols: 3,
            })
        );

        let ragged = vec![
            vec![CellState::Empty; 3],
            vec![CellState::Empty; 2],
        ];
        assert!(matches!(
            Grid::from_matrix(2, 3, ragged, loc(0, 0), loc(1, 1)),
            Err(Error::DimensionMismatch { found_cols: 2, .. })
        ));

        // Dimensions are checked before the markers.
        assert!(matches!(
            Grid::from_cells(2, 2, vec![], loc(-1, 0), loc(0, 0)),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn stray_markers_in_matrix_are_rejected() {
        let mut m = vec![vec![CellState::Empty; 3]; 3];
        m[1][1] = CellState::Start;
        assert_eq!(
            Grid::from_matrix(3, 3, m.clone(), loc(0, 0), loc(2, 2)),
            Err(Error::InvalidStart(loc(1, 1)))
        );
        m[1][1] = CellState::Empty;
        m[2][0] = CellState::End;
        assert_eq!(
            Grid::from_matrix(3, 3, m.clone(), loc(0, 0), loc(2, 2)),
            Err(Error::InvalidEnd(loc(2, 0)))
        );

        // Markers on the designated cells are overwritten, not rejected.
        let mut swapped = vec![vec![CellState::Empty; 3]; 3];
        swapped[0][0] = CellState::End;
        swapped[2][2] = CellState::Start;
        let g = Grid::from_matrix(3, 3, swapped, loc(0, 0), loc(2, 2)).unwrap();
        assert_eq!(g.count(CellState::Start), 1);
        assert_eq!(g.count(CellState::End), 1);
    }

    #[test]
    fn stray_markers_in_codes_are_rejected() {
        let codes = [255, 255, 255, 255, 100, 255, 255, 255, 255];
        assert_eq!(
            Grid::from_codes(3, 3, &codes, loc(0, 0), loc(2, 2)),
            Err(Error::InvalidStart(loc(1, 1)))
        );
        let codes = [255, 255, 255, 255, 255, 255, 200, 255, 255];
        assert_eq!(
            Grid::from_codes(3, 3, &codes, loc(0, 0), loc(2, 2)),
            Err(Error::InvalidEnd(loc(2, 0)))
        );
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        assert_eq!(
            Grid::from_cells(usize::MAX, 2, vec![], loc(0, 0), loc(0, 1)),
            Err(Error::DimensionMismatch {
                rows: usize::MAX,
                cols: 2,
                found_rows: 1,
                found_cols: 0,
            })
        );
        assert!(matches!(
            Grid::open(usize::MAX, 2, loc(0, 0), loc(0, 1)),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn from_codes_decodes_bitmap_values() {
        let codes = [255, 0, 255, 0, 255, 255];
        let g = Grid::from_codes(2, 3, &codes, loc(0, 0), loc(1, 2)).unwrap();
        assert_eq!(g.get(loc(0, 1)), Ok(CellState::Blocked));
        assert_eq!(g.get(loc(1, 0)), Ok(CellState::Blocked));
        assert_eq!(g.get(loc(1, 1)), Ok(CellState::Empty));
        assert_eq!(g.to_codes(), vec![100, 0, 255, 0, 255, 200]);

        assert_eq!(
            Grid::from_codes(1, 2, &[255, 17], loc(0, 0), loc(0, 1)),
            Err(Error::UnknownCellCode(17))
        );
    }

    #[test]
    fn parse_and_display() {
        let text = "S.#\n.#.\n..E\n";
        let g = Grid::parse(text).unwrap();
        assert_eq!(g.dimensions(), (3, 3));
        assert_eq!(g.start(), loc(0, 0));
        assert_eq!(g.end(), loc(2, 2));
        assert_eq!(g.get(loc(0, 2)), Ok(CellState::Blocked));
        assert_eq!(g.to_string(), text);
    }

    #[test]
    fn parse_rejects_bad_maps() {
        assert_eq!(Grid::parse("S.?\n..E"), Err(Error::UnknownGlyph('?')));
        assert_eq!(
            Grid::parse("S.S\n..E"),
            Err(Error::InvalidStart(loc(0, 2)))
        );
        assert_eq!(
            Grid::parse("...\n..E"),
            Err(Error::InvalidStart(loc(-1, -1)))
        );
        assert_eq!(Grid::parse("S..\n..."), Err(Error::InvalidEnd(loc(-1, -1))));
        assert!(matches!(
            Grid::parse("S..\n.E"),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn parse_keeps_interior_blank_lines() {
        assert_eq!(
            Grid::parse("S..\n\n..E"),
            Err(Error::DimensionMismatch {
                rows: 3,
                cols: 3,
                found_rows: 3,
                found_cols: 0,
            })
        );
        let g = Grid::parse("\nS.\n.E\n\n").unwrap();
        assert_eq!(g.dimensions(), (2, 2));
        assert_eq!(g.end(), loc(1, 1));
    }

    #[test]
    fn iter_and_matrix() {
        let g = Grid::parse("S#\n.E").unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[1], (loc(0, 1), CellState::Blocked));
        assert_eq!(
            g.to_matrix(),
            vec![
                vec![CellState::Start, CellState::Blocked],
                vec![CellState::Empty, CellState::End],
            ]
        );
    }
}

use std::fmt;

/// The coordinates of a cell in a grid. Both components are zero-based; whether a
/// coordinate is actually on a board is decided by that board's
/// [`Dimensions`][crate::board::Dimensions].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Row of the cell. Row 0 is labelled `A`.
    pub row: usize,
    /// Column of the cell. Column 0 is labelled `1`.
    pub col: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    /// Formats as the player-facing label, e.g. `C-7`. Rows past `Z` have no letter and
    /// are shown by number.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.row < 26 {
            write!(f, "{}-{}", (b'A' + self.row as u8) as char, self.col + 1)
        } else {
            write!(f, "#{}-{}", self.row, self.col + 1)
        }
    }
}

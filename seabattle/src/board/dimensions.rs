//! Size of a board and the conversions between coordinates and player-facing labels.
use std::borrow::Borrow;

use crate::board::{Coordinate, LabelError};

/// Largest number of rows a board can have. Each row is labelled with one letter.
pub const MAX_ROWS: usize = 26;

/// Simple rectangular dimensions of a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dimensions {
    /// Number of rows. This cooresponds to the `row` of a [`Coordinate`].
    rows: usize,
    /// Number of columns. This cooresponds to the `col` of a [`Coordinate`].
    columns: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified number of rows and columns.
    /// Panics if either is 0 or if `rows` exceeds [`MAX_ROWS`].
    pub fn new(rows: usize, columns: usize) -> Self {
        match Self::try_new(rows, columns) {
            Some(dim) => dim,
            None => panic!(
                "Dimensions must be between 1x1 and {}xN, got {}x{}",
                MAX_ROWS, rows, columns
            ),
        }
    }

    /// Create new [`Dimensions`] with the specified number of rows and columns.
    /// Returns `None` if either is 0, if `rows` exceeds [`MAX_ROWS`] or if
    /// `rows * columns` exceeds `usize::max_value()`.
    pub fn try_new(rows: usize, columns: usize) -> Option<Self> {
        if rows == 0 || columns == 0 || rows > MAX_ROWS {
            None
        } else {
            rows.checked_mul(columns).map(|_| Self { rows, columns })
        }
    }

    /// Get the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Compute the number of cells in a grid of these dimensions.
    pub fn total_size(&self) -> usize {
        self.rows * self.columns
    }

    /// Returns true if the coordinate lies on a board of these dimensions.
    #[inline]
    pub fn validate<B: Borrow<Coordinate>>(&self, coord: B) -> bool {
        let c = coord.borrow();
        c.row < self.rows && c.col < self.columns
    }

    /// Convert a coordinate to a row-major index within these dimensions.
    /// Returns `None` if the coordinate is out of range.
    pub fn try_linearize(&self, coord: &Coordinate) -> Option<usize> {
        if self.validate(coord) {
            Some(coord.row * self.columns + coord.col)
        } else {
            None
        }
    }

    /// Convert a row-major index back into a [`Coordinate`].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate {
            row: idx / self.columns,
            col: idx % self.columns,
        }
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let columns = self.columns;
        (0..self.rows).map(move |row| (0..columns).map(move |col| Coordinate { row, col }))
    }

    /// Letter labelling the given row, or `None` if the row is not on the board.
    pub fn row_letter(&self, row: usize) -> Option<char> {
        if row < self.rows {
            Some((b'A' + row as u8) as char)
        } else {
            None
        }
    }

    /// Row labelled by the given letter, or `None` if no row has that label. Accepts
    /// lowercase letters.
    pub fn row_index(&self, letter: char) -> Option<usize> {
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let row = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
        if row < self.rows {
            Some(row)
        } else {
            None
        }
    }

    /// Convert a player-facing `(letter, 1-based column)` label into a [`Coordinate`].
    pub fn coordinate(&self, letter: char, column: usize) -> Option<Coordinate> {
        let row = self.row_index(letter)?;
        let col = column.checked_sub(1)?;
        Some(Coordinate { row, col }).filter(|coord| self.validate(coord))
    }

    /// Convert a [`Coordinate`] into its player-facing `(letter, 1-based column)` label.
    pub fn label(&self, coord: &Coordinate) -> Option<(char, usize)> {
        if self.validate(coord) {
            self.row_letter(coord.row).map(|letter| (letter, coord.col + 1))
        } else {
            None
        }
    }

    /// Parse a label such as `A-1`, `a1` or `J 10` into a [`Coordinate`] on this board.
    pub fn parse_label(&self, text: &str) -> Result<Coordinate, LabelError> {
        let text = text.trim();
        let mut chars = text.chars();
        let letter = match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => c,
            _ => return Err(LabelError::Malformed(text.to_owned())),
        };
        let rest = chars.as_str().trim_start();
        let rest = rest.strip_prefix('-').unwrap_or(rest).trim_start();
        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LabelError::Malformed(text.to_owned()));
        }
        // Only digits are left, so parsing can only fail by overflowing.
        let column: usize = match rest.parse() {
            Ok(column) => column,
            Err(_) => return Err(LabelError::OutOfRange(text.to_owned())),
        };
        self.coordinate(letter, column)
            .ok_or_else(|| LabelError::OutOfRange(text.to_owned()))
    }
}

impl Default for Dimensions {
    /// Construct the default dimensions, a 10x10 board.
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_bounds() {
        let dim = Dimensions::default();
        assert!(dim.validate(Coordinate::new(0, 0)));
        assert!(dim.validate(Coordinate::new(9, 9)));
        assert!(!dim.validate(Coordinate::new(10, 0)));
        assert!(!dim.validate(Coordinate::new(0, 10)));
    }

    #[test]
    fn row_mapping_is_bidirectional() {
        let dim = Dimensions::new(12, 4);
        for row in 0..12 {
            let letter = dim.row_letter(row).unwrap();
            assert_eq!(dim.row_index(letter), Some(row));
        }
        assert_eq!(dim.row_letter(12), None);
        assert_eq!(dim.row_index('M'), None);
        assert_eq!(dim.row_index('c'), Some(2));
        assert_eq!(dim.row_index('3'), None);
    }

    #[test]
    fn linearize_is_row_major() {
        let dim = Dimensions::new(3, 5);
        assert_eq!(dim.try_linearize(&Coordinate::new(1, 2)), Some(7));
        assert_eq!(dim.un_linearize(7), Coordinate::new(1, 2));
        assert_eq!(dim.try_linearize(&Coordinate::new(3, 0)), None);
    }

    #[test]
    fn rejects_bad_sizes() {
        assert!(Dimensions::try_new(0, 10).is_none());
        assert!(Dimensions::try_new(10, 0).is_none());
        assert!(Dimensions::try_new(27, 10).is_none());
        assert!(Dimensions::try_new(26, 40).is_some());
    }

    #[test]
    fn parse_labels() {
        let dim = Dimensions::default();
        assert_eq!(dim.parse_label("A-1"), Ok(Coordinate::new(0, 0)));
        assert_eq!(dim.parse_label(" j10 "), Ok(Coordinate::new(9, 9)));
        assert_eq!(dim.parse_label("c 4"), Ok(Coordinate::new(2, 3)));
        assert_eq!(
            dim.parse_label("K-1"),
            Err(LabelError::OutOfRange("K-1".to_owned()))
        );
        assert_eq!(
            dim.parse_label("A-0"),
            Err(LabelError::OutOfRange("A-0".to_owned()))
        );
        assert_eq!(
            dim.parse_label("1-A"),
            Err(LabelError::Malformed("1-A".to_owned()))
        );
        assert_eq!(
            dim.parse_label("B-"),
            Err(LabelError::Malformed("B-".to_owned()))
        );
    }

    #[test]
    fn column_must_be_plain_digits() {
        let dim = Dimensions::default();
        assert_eq!(
            dim.parse_label("A+5"),
            Err(LabelError::Malformed("A+5".to_owned()))
        );
        assert_eq!(
            dim.parse_label("A-+5"),
            Err(LabelError::Malformed("A-+5".to_owned()))
        );
        assert_eq!(
            dim.parse_label("A-99999999999999999999999"),
            Err(LabelError::OutOfRange("A-99999999999999999999999".to_owned()))
        );
    }

    #[test]
    fn labels_round_trip_through_display() {
        let dim = Dimensions::default();
        let coord = Coordinate::new(4, 6);
        assert_eq!(dim.label(&coord), Some(('E', 7)));
        assert_eq!(coord.to_string(), "E-7");
        assert_eq!(dim.parse_label(&coord.to_string()), Ok(coord));
    }
}

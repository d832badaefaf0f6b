//! Plain-text rendering of the grids.
use std::fmt::{self, Write};

use crate::board::{Coordinate, Dimensions, Peg};

/// What a single cell shows in a text board. Each token pads itself so the board can lay
/// them out in two-character columns.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(super) enum Token {
    Empty,
    Segment { hit: bool },
    Peg(Peg),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Empty => f.pad(".."),
            Token::Segment { hit: false } => f.pad("S"),
            Token::Segment { hit: true } => f.pad("H"),
            Token::Peg(peg) => fmt::Display::fmt(&peg.code(), f),
        }
    }
}

/// Write a header of 1-based column numbers followed by one labelled line per row. Only
/// the end of the whole board is trimmed, so every other line keeps its padding.
pub(super) fn render_grid(
    f: &mut fmt::Formatter,
    dim: &Dimensions,
    mut token: impl FnMut(Coordinate) -> Token,
) -> fmt::Result {
    let mut board = String::from("  ");
    for col in 0..dim.columns() {
        write!(board, "{:<2}", col + 1)?;
    }
    for (row, coords) in dim.iter_coordinates().enumerate() {
        write!(board, "\n{} ", dim.row_letter(row).unwrap_or('?'))?;
        for coord in coords {
            write!(board, "{:<2}", token(coord))?;
        }
    }
    f.write_str(board.trim_end())
}

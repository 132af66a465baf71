//! Text rendering of the board.
//!
//! Columns are labelled `A`-`H` and rows `1`-`8`, with row 8 drawn at the top.
//! Squares are drawn as `B` (black), `W` (white) and `.` (empty).

use crate::{EDGE_LENGTH, NUM_SPACES};
use std::fmt::{self, Formatter};

const HEADER: &str = "    A B C D E F G H";
const BORDER: &str = "  -------------------";

/// Format 64 characters into a labelled grid.
/// `piece_iter` must yield exactly 64 items, in row-major order from row 1.
pub fn format_grid<T: Iterator<Item = char>>(piece_iter: T, f: &mut Formatter) -> fmt::Result {
    let pieces: Vec<char> = piece_iter.collect();
    if pieces.len() != NUM_SPACES {
        return Err(fmt::Error);
    }

    writeln!(f, "{}", HEADER)?;
    writeln!(f, "{}", BORDER)?;

    for (row, rank) in pieces.chunks(EDGE_LENGTH).enumerate().rev() {
        write!(f, "{} | ", row + 1)?;
        for piece in rank {
            write!(f, "{} ", piece)?;
        }
        writeln!(f, "| {}", row + 1)?;
    }

    writeln!(f, "{}", BORDER)?;
    write!(f, "{}", HEADER)
}

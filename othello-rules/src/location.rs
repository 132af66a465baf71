//! Code for working with [`Location`]s on the Othello board.

use crate::{RulesError, EDGE_LENGTH, NUM_SPACES};
use derive_more::{BitOr, BitOrAssign, Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// A square on the Othello board, addressed by column and row.
/// Always on the board: the only way to build one from raw coordinates is checked.
// Field order gives row-major `Ord`.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Location {
    row: u8,
    col: u8,
}

/// A set of locations on the Othello board, iterated in row-major order.
/// Stored as one bit per square, so it never holds duplicates.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, From, Into, BitOr, BitOrAssign)]
pub struct LocationList(u64);

impl Location {
    /// Build a location from column and row coordinates.
    pub fn new(col: usize, row: usize) -> Result<Self, RulesError> {
        if col >= EDGE_LENGTH || row >= EDGE_LENGTH {
            return Err(RulesError::OutOfBounds { col, row });
        }
        Ok(Self::new_unchecked(col as u8, row as u8))
    }

    /// Build a location without checking the coordinates.
    /// Callers must guarantee both are in `0..8`.
    #[inline]
    pub(crate) const fn new_unchecked(col: u8, row: u8) -> Self {
        Self { row, col }
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * EDGE_LENGTH + self.col as usize
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col as usize
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Get the `(col, row)` coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.col(), self.row())
    }

    /// Iterate over every square in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..NUM_SPACES as u8).map(|index| Self::new_unchecked(index % 8, index / 8))
    }

    /// The letter used for a column in notation ("A" for column 0).
    pub fn col_char(col: usize) -> Option<char> {
        "ABCDEFGH".chars().nth(col)
    }
}

/// Convert this [`Location`] into string notation ("A4").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let col_str = Self::col_char(self.col()).ok_or(fmt::Error)?;
        let row_str = "12345678".chars().nth(self.row()).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid location string")]
pub struct ParseLocationError;

/// Build a [`Location`] from 1-indexed string notation ("A4").
impl std::str::FromStr for Location {
    type Err = ParseLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let col_str = chars.next().ok_or(ParseLocationError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseLocationError)?;
        let row = chars
            .next()
            .ok_or(ParseLocationError)?
            .to_digit(10)
            .ok_or(ParseLocationError)? as usize;

        if row == 0 || chars.next().is_some() {
            return Err(ParseLocationError);
        }

        Self::new(col, row - 1).map_err(|_| ParseLocationError)
    }
}

impl LocationList {
    /// Create an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    fn bit(loc: Location) -> u64 {
        1 << loc.to_index()
    }

    /// Add `loc` to this list. Adding a location twice has no effect.
    #[inline]
    pub fn insert(&mut self, loc: Location) {
        self.0 |= Self::bit(loc);
    }

    /// Returns whether `loc` is in this list.
    #[inline]
    pub fn contains(self, loc: Location) -> bool {
        self.0 & Self::bit(loc) != 0
    }

    /// Returns whether the list is empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Collect the locations into a vector, in row-major order.
    pub fn to_vec(self) -> Vec<Location> {
        self.collect()
    }
}

impl ExactSizeIterator for LocationList {
    fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl Iterator for LocationList {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.0 == 0 {
            return None;
        }

        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Location::new_unchecked(index % 8, index / 8))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut list = Self::new();
        for loc in iter {
            list.insert(loc);
        }
        list
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|mv| mv.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}

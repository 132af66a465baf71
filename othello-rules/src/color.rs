//! Piece colors and the contents of a single square.

use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game, and the color of their pieces.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colors, in turn order.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Gets the other color.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Default for Color {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    /// Gets the other color.
    fn not(self) -> Self {
        self.opposite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("Black"),
            Color::White => f.write_str("White"),
        }
    }
}

#[derive(Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid color string")]
pub struct ParseColorError;

/// Parse a color from its name or initial ("black", "W").
impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Color::Black),
            "white" | "w" => Ok(Color::White),
            _ => Err(ParseColorError),
        }
    }
}

/// The contents of one square on the board.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// The color of the piece on this square, if any.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The character used to draw this square.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }

    /// Parse a drawn square. Accepts both `B`/`W` and `X`/`O` piece styles.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            '.' | '-' => Some(Cell::Empty),
            'B' | 'X' => Some(Cell::Black),
            'W' | 'O' => Some(Cell::White),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_colors() {
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(!Color::Black, Color::White);
        assert_eq!(!!Color::White, Color::White);
    }

    #[test]
    fn color_from_str() {
        assert_eq!("black".parse(), Ok(Color::Black));
        assert_eq!("White".parse(), Ok(Color::White));
        assert_eq!("W".parse(), Ok(Color::White));
        assert_eq!("grey".parse::<Color>(), Err(ParseColorError));
    }

    #[test]
    fn cell_colors() {
        assert_eq!(Cell::Empty.color(), None);
        assert_eq!(Cell::from(Color::Black).color(), Some(Color::Black));
        assert_eq!(Cell::from(Color::White).color(), Some(Color::White));
    }

    #[test]
    fn cell_symbols() {
        for cell in [Cell::Empty, Cell::Black, Cell::White] {
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
        }
        assert_eq!(Cell::from_symbol('x'), Some(Cell::Black));
        assert_eq!(Cell::from_symbol('?'), None);
    }
}

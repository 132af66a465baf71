//! The Othello grid and its move rules.
//!
//! All rules are expressed as scans along [`Ray`](crate::Ray)s from a square,
//! one per direction in [`DIRECTIONS`]. Discovery scans out from a player's
//! own pieces looking for an empty landing square; flip resolution scans out
//! from the placed piece looking for a closing piece of the same color.

use crate::{
    render, Cell, Color, Direction, Location, LocationList, RulesError, DIRECTIONS, NUM_SPACES,
};
use derive_more::{Display, Error};
use log::trace;
use std::fmt;

/// The complete contents of an Othello board.
///
/// Copies are fully independent, so a board can be cloned freely to explore
/// hypothetical moves.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Board {
    cells: [Cell; NUM_SPACES],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The four centre squares of the starting position.
    const OPENING: [(u8, u8, Cell); 4] = [
        (3, 3, Cell::White),
        (4, 4, Cell::White),
        (4, 3, Cell::Black),
        (3, 4, Cell::Black),
    ];

    /// The standard starting position: White on D4 and E5, Black on E4 and D5.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for &(col, row, cell) in Self::OPENING.iter() {
            board.set(Location::new_unchecked(col, row), cell);
        }
        board
    }

    fn empty() -> Self {
        Self {
            cells: [Cell::Empty; NUM_SPACES],
        }
    }

    /// Get the contents of a square.
    #[inline]
    pub fn get(&self, loc: Location) -> Cell {
        self.cells[loc.to_index()]
    }

    #[inline]
    fn set(&mut self, loc: Location, cell: Cell) {
        self.cells[loc.to_index()] = cell;
    }

    /// Count the squares holding `cell`. Pass a [`Color`] to count pieces,
    /// or [`Cell::Empty`] to count empty squares.
    pub fn count(&self, cell: impl Into<Cell>) -> usize {
        let cell = cell.into();
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Count the pieces of both colors.
    pub fn count_occupied(&self) -> usize {
        NUM_SPACES - self.count(Cell::Empty)
    }

    /// All squares holding `cell`, in row-major order.
    pub fn squares_of(&self, cell: impl Into<Cell>) -> LocationList {
        let cell = cell.into();
        Location::all().filter(|&loc| self.get(loc) == cell).collect()
    }

    /// All squares where `color` may legally play, in row-major order.
    /// Empty if `color` has no move.
    pub fn legal_moves(&self, color: Color) -> LocationList {
        self.squares_of(color)
            .map(|origin| self.moves_from(origin))
            .fold(LocationList::new(), |acc, moves| acc | moves)
    }

    /// Returns whether `color` has at least one legal move.
    pub fn has_legal_move(&self, color: Color) -> bool {
        !self.legal_moves(color).is_empty()
    }

    /// The moves that capture along some line starting from the piece on `origin`.
    /// Empty if `origin` is empty.
    pub fn moves_from(&self, origin: Location) -> LocationList {
        DIRECTIONS
            .iter()
            .filter_map(|&direction| self.discover_move(origin, direction))
            .collect()
    }

    /// Scan from the piece on `origin` in `direction` for a move that would
    /// capture the pieces in between.
    ///
    /// A move exists when the scan crosses one or more opposing pieces and
    /// then reaches an empty square. Reaching a piece of the origin's color,
    /// an empty square with nothing crossed, or the edge of the board first
    /// means there is no move along this line.
    pub fn discover_move(&self, origin: Location, direction: Direction) -> Option<Location> {
        let color = self.get(origin).color()?;
        let mut crossed = false;

        for loc in origin.ray(direction) {
            match self.get(loc).color() {
                None if crossed => return Some(loc),
                None => return None,
                Some(c) if c == color => return None,
                Some(_) => crossed = true,
            }
        }

        None
    }

    /// The opposing pieces `color` would flip in `direction` by playing on `mv`.
    ///
    /// These are the contiguous opposing pieces starting next to `mv`, but
    /// only if a piece of `color` closes the run. A run ending at an empty
    /// square or the edge of the board flips nothing.
    pub fn flips_in_direction(
        &self,
        mv: Location,
        color: Color,
        direction: Direction,
    ) -> LocationList {
        let mut run = LocationList::new();

        for loc in mv.ray(direction) {
            match self.get(loc).color() {
                None => break,
                Some(c) if c == color => return run,
                Some(_) => run.insert(loc),
            }
        }

        LocationList::new()
    }

    /// Every piece `color` would flip by playing on `mv`, over all eight directions.
    pub fn flips(&self, mv: Location, color: Color) -> LocationList {
        DIRECTIONS
            .iter()
            .map(|&direction| self.flips_in_direction(mv, color, direction))
            .fold(LocationList::new(), |acc, run| acc | run)
    }

    /// Returns whether `color` may play on `mv`.
    pub fn is_legal_move(&self, mv: Location, color: Color) -> bool {
        self.get(mv).is_empty() && !self.flips(mv, color).is_empty()
    }

    /// Place a piece of `color` on `mv` and flip every captured piece.
    /// Returns the flipped squares, not including `mv` itself.
    ///
    /// Fails with [`RulesError::IllegalMove`] without touching the board if
    /// `mv` is occupied or would flip nothing.
    pub fn execute_move(&mut self, mv: Location, color: Color) -> Result<LocationList, RulesError> {
        let flips = self.flips(mv, color);
        if !self.get(mv).is_empty() || flips.is_empty() {
            return Err(RulesError::IllegalMove {
                location: mv,
                color,
            });
        }

        self.set(mv, color.into());
        for loc in flips {
            self.set(loc, color.into());
        }

        trace!("{} played {}, flipping {}", color, mv, flips);
        Ok(flips)
    }

    /// [`execute_move`](Self::execute_move) from raw coordinates.
    /// Fails with [`RulesError::OutOfBounds`] before touching the grid if
    /// either coordinate is outside `0..8`.
    pub fn execute_move_at(
        &mut self,
        col: usize,
        row: usize,
        color: Color,
    ) -> Result<LocationList, RulesError> {
        let mv = Location::new(col, row)?;
        self.execute_move(mv, color)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::format_grid(self.cells.iter().map(|cell| cell.symbol()), f)
    }
}

#[derive(Debug, PartialEq, Display, Error)]
pub enum ParseBoardError {
    #[display(fmt = "invalid square symbol {:?}", symbol)]
    InvalidSymbol { symbol: char },
    #[display(fmt = "expected 64 squares, found {}", found)]
    WrongLength { found: usize },
}

/// Parse a board from 64 square symbols in row-major order.
/// Whitespace is ignored, so rows may be written on separate lines.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != NUM_SPACES {
            return Err(ParseBoardError::WrongLength {
                found: symbols.len(),
            });
        }

        let mut board = Self::empty();
        for (loc, &symbol) in Location::all().zip(symbols.iter()) {
            let cell = Cell::from_symbol(symbol).ok_or(ParseBoardError::InvalidSymbol { symbol })?;
            board.set(loc, cell);
        }
        Ok(board)
    }
}

//! Implements game-level Othello logic.
//!
//! A [`Game`] tracks whose turn it is on top of a [`Board`], and only
//! allows passing when the side to move has no legal placement.

use crate::{Board, Color, Location, LocationList, RulesError};
use log::debug;
use std::cmp::Ordering;
use std::fmt;

/// An action in an Othello game: pass or place a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Play(Location),
    Pass,
}

impl From<Location> for Action {
    fn from(mv: Location) -> Self {
        Self::Play(mv)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Play(mv) => write!(f, "{}", mv),
            Action::Pass => f.write_str("pass"),
        }
    }
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Game {
    board: Board,
    active: Color,
    just_passed: bool,
}

impl Default for Game {
    /// Gets the starting position with the starting player to move.
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::default())
    }

    /// Resume a game from an arbitrary position.
    pub fn from_board(board: Board, active: Color) -> Self {
        Self {
            board,
            active,
            just_passed: false,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The color to move.
    #[inline]
    pub fn active(&self) -> Color {
        self.active
    }

    /// Whether the previous turn was a pass.
    #[inline]
    pub fn just_passed(&self) -> bool {
        self.just_passed
    }

    /// Get the legal placements for the active player.
    pub fn legal_moves(&self) -> LocationList {
        self.board.legal_moves(self.active)
    }

    /// Returns whether `action` is legal for the active player.
    pub fn is_legal(&self, action: Action) -> bool {
        match action {
            Action::Play(mv) => self.board.is_legal_move(mv, self.active),
            Action::Pass => !self.board.has_legal_move(self.active),
        }
    }

    /// Take an action as the active player and hand the turn over.
    /// Returns the squares flipped by the action (none for a pass).
    /// On error the game is unchanged.
    pub fn apply(&mut self, action: Action) -> Result<LocationList, RulesError> {
        let color = self.active;
        let flips = match action {
            Action::Play(mv) => self.board.execute_move(mv, color)?,
            Action::Pass if self.board.has_legal_move(color) => {
                return Err(RulesError::IllegalPass { color })
            }
            Action::Pass => LocationList::new(),
        };

        debug!("{}: {} (flipped {})", color, action, flips.len());
        self.active = !color;
        self.just_passed = action == Action::Pass;
        Ok(flips)
    }

    /// The game is over when neither player can place a piece.
    pub fn is_finished(&self) -> bool {
        !self.board.has_legal_move(self.active) && !self.board.has_legal_move(!self.active)
    }

    /// The number of pieces `color` has on the board.
    pub fn score(&self, color: Color) -> usize {
        self.board.count(color)
    }

    /// The player with more pieces, or `None` on a draw.
    pub fn winner(&self) -> Option<Color> {
        match self.score(Color::Black).cmp(&self.score(Color::White)) {
            Ordering::Greater => Some(Color::Black),
            Ordering::Less => Some(Color::White),
            Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.active)?;
        if self.just_passed {
            write!(f, " (last move was a pass)")?;
        }
        Ok(())
    }
}

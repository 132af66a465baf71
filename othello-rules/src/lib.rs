//! `othello-rules` implements the rules of Othello for drivers and UIs.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] owns the 8x8 grid and implements the core rules: legal-move
//!    discovery and flip resolution for either color. It knows nothing about
//!    whose turn it is.
//!  - [`Game`] wraps a [`Board`] with the side to move and pass handling.
//!    Driver loops should prefer it.
//!
//! Locations use `(col, row)` coordinates in `0..8`, written in notation as
//! a column letter `A`-`H` and a row number `1`-`8`.

pub mod render;
pub mod test_utils;

mod board;
mod color;
mod direction;
mod error;
mod game;
mod location;

pub use board::*;
pub use color::*;
pub use direction::*;
pub use error::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;

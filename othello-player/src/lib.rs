//! `othello-player` drives games of Othello between two [`Controller`]s.
//!
//! The rules live in `othello-rules`; this crate supplies the turn loop
//! ([`Session`]), per-player clocks, terminal rendering of scores, and the
//! ways of choosing a move (a human at the terminal, or random legal moves).

pub mod clock;
pub mod config;
pub mod controllers;
pub mod logging;
pub mod session;
pub mod ui;

pub use clock::Clock;
pub use config::SessionConfig;
pub use controllers::{Controller, HumanController, RandomController};
pub use session::{Outcome, Session};

//! "Perft" move-generation test: count the number of leaves at a given depth.
//! Counts from the opening position are well known, which makes this a
//! thorough check of legal-move discovery and flip resolution.
//! See: http://www.aartbik.com/MISC/reversi.html

use crate::{Action, Game, RulesError};

/// Count the leaves `depth` plies below the opening position.
/// A forced pass counts as a ply; a finished game is a leaf.
/// Any move the rules reject is returned as an error, since move generation produced it.
pub fn run_perft(depth: u64) -> Result<u64, RulesError> {
    leaves_below(Game::new(), depth)
}

/// Count the leaves `depth` plies below `game`.
pub fn leaves_below(game: Game, depth: u64) -> Result<u64, RulesError> {
    // Leaf node for this depth
    if depth == 0 {
        return Ok(1);
    }

    let all_moves = game.legal_moves();
    if all_moves.is_empty() {
        // Both players passed: game is over
        if game.just_passed() {
            return Ok(1);
        }

        let mut next = game;
        next.apply(Action::Pass)?;
        return leaves_below(next, depth - 1);
    }

    all_moves
        .map(|mv| {
            let mut next = game;
            next.apply(Action::Play(mv))?;
            leaves_below(next, depth - 1)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), Ok(4));
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), Ok(12));
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), Ok(56));
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), Ok(244));
}

#[test]
fn perft_counts_finished_games_as_leaves() {
    // Black fills the board's last square; nobody can move afterwards.
    let board: crate::Board = format!("{}.W{}", "B".repeat(61), "B").parse().unwrap();
    let game = Game::from_board(board, crate::Color::Black);
    assert_eq!(leaves_below(game, 1), Ok(1));
    assert_eq!(leaves_below(game, 5), Ok(1));
}

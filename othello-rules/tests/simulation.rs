//! Whole-game and arbitrary-position checks of the move rules.

use othello_rules::{Action, Board, Cell, Color, Game, Location, LocationList, NUM_SPACES};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

/// Play one game of uniformly random legal moves, checking every turn.
/// Returns the final game and the number of placements made.
fn play_random_game(seed: u64) -> Result<(Game, usize), TestCaseError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new();
    let mut placements = 0;

    while !game.is_finished() {
        let before = *game.board();
        let color = game.active();

        let moves = game.legal_moves();
        prop_assert_eq!(moves, game.legal_moves());

        match moves.choose(&mut rng) {
            None => {
                game.apply(Action::Pass)
                    .map_err(|e| TestCaseError::fail(e.to_string()))?;
                prop_assert_eq!(*game.board(), before);
            }
            Some(mv) => {
                let expected = before.flips(mv, color);
                prop_assert!(!expected.is_empty());

                let flips = game
                    .apply(Action::Play(mv))
                    .map_err(|e| TestCaseError::fail(e.to_string()))?;
                prop_assert_eq!(flips, expected);

                let after = game.board();
                prop_assert_eq!(after.get(mv), Cell::from(color));
                prop_assert_eq!(after.count_occupied(), before.count_occupied() + 1);
                prop_assert_eq!(after.count(color), before.count(color) + 1 + flips.len());
                prop_assert_eq!(after.count(!color), before.count(!color) - flips.len());

                for loc in Location::all() {
                    let (old, new) = (before.get(loc), after.get(loc));
                    if !old.is_empty() {
                        prop_assert!(!new.is_empty(), "{} was emptied", loc);
                    }
                    if old != new {
                        prop_assert!(loc == mv || flips.contains(loc));
                    }
                }

                placements += 1;
            }
        }

        prop_assert!(game.board().count_occupied() <= NUM_SPACES);
    }

    prop_assert!(placements <= NUM_SPACES - 4);
    Ok((game, placements))
}

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Empty), Just(Cell::Black), Just(Cell::White)]
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(cell_strategy(), NUM_SPACES).prop_map(|cells| {
        let symbols: String = cells.into_iter().map(Cell::symbol).collect();
        symbols.parse().unwrap()
    })
}

fn color_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::Black), Just(Color::White)]
}

#[test]
fn random_games_finish() {
    for seed in 0..20 {
        let (game, placements) = play_random_game(seed).unwrap();
        let board = game.board();

        assert!(game.is_finished());
        assert_eq!(board.count_occupied(), 4 + placements);
        assert_eq!(
            board.count(Color::Black) + board.count(Color::White) + board.count(Cell::Empty),
            NUM_SPACES
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_game_invariants(seed in any::<u64>()) {
        play_random_game(seed)?;
    }

    /// Discovery from a player's pieces agrees with flip resolution from every empty square.
    #[test]
    fn discovered_moves_match_flips(board in board_strategy(), color in color_strategy()) {
        let by_flips: LocationList = board
            .squares_of(Cell::Empty)
            .filter(|&mv| !board.flips(mv, color).is_empty())
            .collect();

        prop_assert_eq!(board.legal_moves(color), by_flips);
    }

    #[test]
    fn execute_never_empties(board in board_strategy(), color in color_strategy()) {
        for mv in board.legal_moves(color) {
            let mut next = board;
            let flips = next.execute_move(mv, color).unwrap();

            prop_assert!(!flips.is_empty());
            prop_assert!(!flips.contains(mv));
            prop_assert_eq!(next.count(Cell::Empty), board.count(Cell::Empty) - 1);
            for loc in flips {
                prop_assert_eq!(board.get(loc), Cell::from(!color));
                prop_assert_eq!(next.get(loc), Cell::from(color));
            }
        }
    }

    #[test]
    fn illegal_moves_are_rejected(board in board_strategy(), color in color_strategy()) {
        let legal = board.legal_moves(color);
        for mv in Location::all().filter(|&mv| !legal.contains(mv)) {
            let mut next = board;
            prop_assert!(next.execute_move(mv, color).is_err());
            prop_assert_eq!(next, board);
        }
    }
}

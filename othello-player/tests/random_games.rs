use othello_player::{RandomController, Session, SessionConfig};
use othello_rules::{Cell, Color, NUM_SPACES};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

fn random_session(seed: u64) -> Session<'static, io::Sink> {
    let config = SessionConfig {
        quiet: true,
        ..SessionConfig::default()
    };
    Session::new(
        Box::new(RandomController::new(StdRng::seed_from_u64(seed))),
        Box::new(RandomController::new(StdRng::seed_from_u64(seed ^ 0xff))),
        config,
        io::sink(),
    )
}

#[test]
fn random_games_run_to_completion() {
    for seed in 0..10 {
        let outcome = random_session(seed).run().unwrap();
        let board = outcome.game.board();

        assert!(outcome.game.is_finished());
        assert!(outcome.black + outcome.white <= NUM_SPACES);
        assert_eq!(outcome.black + outcome.white + board.count(Cell::Empty), NUM_SPACES);
        assert!(outcome.turns >= outcome.black + outcome.white - 4);

        let expected = if outcome.black > outcome.white {
            Some(Color::Black)
        } else if outcome.white > outcome.black {
            Some(Color::White)
        } else {
            None
        };
        assert_eq!(outcome.winner, expected);
    }
}

#[test]
fn seeded_games_are_reproducible() {
    let first = random_session(42).run().unwrap();
    let second = random_session(42).run().unwrap();
    assert_eq!(first, second);
}

#[test]
fn clock_only_counts_down() {
    let mut session = random_session(3);
    for _ in 0..10 {
        session.play_turn().unwrap();
    }
    for color in Color::ALL.iter().copied() {
        assert!(session.clock().remaining(color) <= SessionConfig::default().time_limit);
    }
}

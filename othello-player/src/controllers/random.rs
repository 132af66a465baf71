use super::Controller;
use othello_rules::{Action, Game};
use rand::seq::IteratorRandom;
use rand::Rng;

/// Plays a uniformly random legal move, or passes when there is none.
pub struct RandomController<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomController<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Controller for RandomController<R> {
    fn choose_action(&mut self, game: &Game) -> anyhow::Result<Action> {
        Ok(game
            .legal_moves()
            .choose(&mut self.rng)
            .map_or(Action::Pass, Action::Play))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use othello_rules::{Board, Color};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn chooses_legal_moves() {
        let game = Game::new();
        let mut controller = RandomController::new(StdRng::seed_from_u64(7));

        for _ in 0..20 {
            let action = controller.choose_action(&game).unwrap();
            assert!(game.is_legal(action));
            assert_ne!(action, Action::Pass);
        }
    }

    #[test]
    fn passes_without_moves() {
        let board: Board = format!("{}BBBW....{}", ".".repeat(24), ".".repeat(32))
            .parse()
            .unwrap();
        let game = Game::from_board(board, Color::White);
        let mut controller = RandomController::new(StdRng::seed_from_u64(7));

        assert_eq!(controller.choose_action(&game).unwrap(), Action::Pass);
    }
}

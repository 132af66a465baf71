use othello_rules::{Action, Game};

/// A source of moves for one player: a person at a terminal, a script, or a program.
pub trait Controller {
    /// Choose an action for the active player of `game`.
    /// Errors end the session; an illegal action is retried by the caller.
    fn choose_action(&mut self, game: &Game) -> anyhow::Result<Action>;
}

//! [`Controller`] for a person typing moves at a terminal.

use super::Controller;
use crate::ui;
use anyhow::{bail, Context};
use othello_rules::{Action, Game, Location};
use std::io::{self, BufRead, Stdout, Write};

/// Reads moves in notation ("C4", or "pass") and reprompts until one is legal.
pub struct HumanController<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanController<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut input_line = String::new();
        let read = self
            .input
            .read_line(&mut input_line)
            .context("cannot read move")?;
        if read == 0 {
            bail!("input closed before a move was entered");
        }
        Ok(input_line.trim().to_string())
    }
}

impl HumanController<io::StdinLock<'static>, Stdout> {
    /// A controller reading from stdin and prompting on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Controller for HumanController<R, W> {
    fn choose_action(&mut self, game: &Game) -> anyhow::Result<Action> {
        loop {
            write!(self.output, "Enter a move for {}: ", game.active())?;
            self.output.flush()?;

            let line = self.read_line()?;
            let action = if line.eq_ignore_ascii_case("pass") {
                Action::Pass
            } else {
                match line.parse::<Location>() {
                    Ok(mv) => Action::Play(mv),
                    Err(_) => {
                        writeln!(self.output, "Cannot parse move.")?;
                        continue;
                    }
                }
            };

            if game.is_legal(action) {
                return Ok(action);
            }

            let moves = game.legal_moves();
            if moves.is_empty() {
                writeln!(self.output, "Invalid move. Please enter 'pass'.")?;
            } else {
                writeln!(
                    self.output,
                    "Invalid move. Legal moves: {}",
                    ui::moves_string(moves)
                )?;
            }
        }
    }
}

//! The driver loop: alternate turns between two controllers until the game ends.

use crate::{ui, Clock, Controller, SessionConfig};
use anyhow::{bail, Context};
use log::{info, warn};
use othello_rules::{Action, Color, Game};
use std::io::Write;
use std::time::Instant;

/// The final position of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub game: Game,
    pub black: usize,
    pub white: usize,
    pub winner: Option<Color>,
    /// Turns taken, passes included.
    pub turns: usize,
}

/// One game between two controllers, rendering to `output`.
pub struct Session<'a, W: Write> {
    game: Game,
    black: Box<dyn Controller + 'a>,
    white: Box<dyn Controller + 'a>,
    clock: Clock,
    config: SessionConfig,
    output: W,
    turns: usize,
}

impl<'a, W: Write> Session<'a, W> {
    pub fn new(
        black: Box<dyn Controller + 'a>,
        white: Box<dyn Controller + 'a>,
        config: SessionConfig,
        output: W,
    ) -> Self {
        Self {
            game: Game::new(),
            black,
            white,
            clock: Clock::new(config.time_limit),
            config,
            output,
            turns: 0,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    fn render(&mut self) -> anyhow::Result<()> {
        if !self.config.quiet {
            writeln!(
                self.output,
                "\n{}\n\n{}\n{}\n",
                self.game,
                ui::statistics(&self.game, &self.clock),
                ui::legal_moves_lines(&self.game)
            )?;
        }
        Ok(())
    }

    /// Ask the active controller for an action and apply it.
    /// Illegal actions are retried up to the configured limit.
    pub fn play_turn(&mut self) -> anyhow::Result<Action> {
        self.render()?;
        let color = self.game.active();

        for attempt in 1..=self.config.max_attempts {
            let controller = match color {
                Color::Black => &mut self.black,
                Color::White => &mut self.white,
            };

            let started = Instant::now();
            let action = controller
                .choose_action(&self.game)
                .with_context(|| format!("{} could not choose an action", color))?;
            self.clock.charge(color, started.elapsed());

            match self.game.apply(action) {
                Ok(flips) => {
                    info!("turn {}: {} played {} flipping {}", self.turns + 1, color, action, flips);
                    if self.clock.is_flagged(color) {
                        warn!("{} is out of time", color);
                    }
                    if action == Action::Pass && !self.config.quiet {
                        writeln!(self.output, "{} has no legal move and passes.", color)?;
                    }
                    self.turns += 1;
                    return Ok(action);
                }
                Err(error) => warn!("{} attempt {}: {}", color, attempt, error),
            }
        }

        bail!(
            "{} proposed {} illegal actions in a row",
            color,
            self.config.max_attempts
        )
    }

    /// Play turns until neither player can move.
    pub fn run(mut self) -> anyhow::Result<Outcome> {
        while !self.game.is_finished() {
            self.play_turn()?;
        }

        let winner = self.game.winner();
        self.render()?;
        if !self.config.quiet {
            writeln!(self.output, "{}", ui::result_line(winner))?;
        }
        info!("game over after {} turns: {}", self.turns, ui::result_line(winner));

        Ok(Outcome {
            game: self.game,
            black: self.game.score(Color::Black),
            white: self.game.score(Color::White),
            winner,
            turns: self.turns,
        })
    }
}

//! Per-player thinking time.

use othello_rules::Color;
use std::time::Duration;

/// The time each player has left. Time only counts down while a player's
/// controller is choosing; running out is reported but not penalised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clock {
    remaining: [Duration; 2],
}

impl Clock {
    /// Give both players `limit` to spend over the whole game.
    pub fn new(limit: Duration) -> Self {
        Self {
            remaining: [limit; 2],
        }
    }

    #[inline]
    fn slot(color: Color) -> usize {
        match color {
            Color::Black => 0,
            Color::White => 1,
        }
    }

    pub fn remaining(&self, color: Color) -> Duration {
        self.remaining[Self::slot(color)]
    }

    /// Deduct `elapsed` from `color`'s time, stopping at zero.
    pub fn charge(&mut self, color: Color, elapsed: Duration) {
        let remaining = &mut self.remaining[Self::slot(color)];
        *remaining = remaining.saturating_sub(elapsed);
    }

    /// Whether `color` has used up all of their time.
    pub fn is_flagged(&self, color: Color) -> bool {
        self.remaining(color).is_zero()
    }
}

use std::time::Duration;

/// Thinking time each player starts with.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(300);

/// How many illegal actions a controller may propose in one turn before the session gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Settings for one [`Session`](crate::Session).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub time_limit: Duration,
    pub max_attempts: usize,
    /// Skip drawing the board and statistics each turn.
    pub quiet: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            quiet: false,
        }
    }
}

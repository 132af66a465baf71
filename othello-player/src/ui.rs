//! Terminal text for scores, clocks and move lists.

use crate::Clock;
use itertools::Itertools;
use othello_rules::{Color, Game, LocationList};
use std::time::Duration;

/// Format a duration as minutes and seconds ("4:05").
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// List moves in notation, separated by commas ("D3, C4").
pub fn moves_string(moves: LocationList) -> String {
    moves.into_iter().join(", ")
}

/// Each player's score and remaining time.
pub fn statistics(game: &Game, clock: &Clock) -> String {
    let lines = Color::ALL.iter().map(|&color| {
        format!(
            "{}: {} / {}",
            color,
            game.score(color),
            format_duration(clock.remaining(color))
        )
    });

    format!(
        "STATISTICS (score / remaining time):\n{}",
        lines.format("\n")
    )
}

/// Each player's legal moves ("Black: D3, C4, F5, E6").
pub fn legal_moves_lines(game: &Game) -> String {
    Color::ALL
        .iter()
        .map(|&color| format!("{}: {}", color, moves_string(game.board().legal_moves(color))))
        .join("\n")
}

/// The closing line of a game.
pub fn result_line(winner: Option<Color>) -> String {
    match winner {
        Some(color) => format!("Winner: {}.", color),
        None => "Draw.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_secs(300)), "5:00");
        assert_eq!(format_duration(Duration::from_millis(65_900)), "1:05");
        assert_eq!(format_duration(Duration::ZERO), "0:00");
    }

    #[test]
    fn opening_moves_string() {
        let game = Game::new();
        assert_eq!(moves_string(game.legal_moves()), "D3, C4, F5, E6");
        assert_eq!(moves_string(LocationList::new()), "");
    }

    #[test]
    fn opening_statistics() {
        let game = Game::new();
        let mut clock = Clock::new(Duration::from_secs(300));
        clock.charge(Color::White, Duration::from_secs(100));

        assert_eq!(
            statistics(&game, &clock),
            "STATISTICS (score / remaining time):\nBlack: 2 / 5:00\nWhite: 2 / 3:20"
        );
    }

    #[test]
    fn opening_legal_moves_lines() {
        assert_eq!(
            legal_moves_lines(&Game::new()),
            "Black: D3, C4, F5, E6\nWhite: E3, F4, C5, D6"
        );
    }

    #[test]
    fn results() {
        assert_eq!(result_line(Some(Color::White)), "Winner: White.");
        assert_eq!(result_line(None), "Draw.");
    }
}

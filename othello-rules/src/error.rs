use crate::{Color, Location};
use derive_more::{Display, Error};

/// A rule violation reported by [`Board`](crate::Board) or [`Game`](crate::Game).
/// When one of these is returned, the board has not been modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum RulesError {
    /// A coordinate outside `0..8` was supplied.
    #[display(fmt = "coordinates ({}, {}) are off the board", col, row)]
    OutOfBounds { col: usize, row: usize },

    /// The square is occupied, or placing there would flip nothing.
    #[display(fmt = "{} cannot play at {}", color, location)]
    IllegalMove { location: Location, color: Color },

    /// A pass was requested while a legal move exists.
    #[display(fmt = "{} cannot pass while a legal move exists", color)]
    IllegalPass { color: Color },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            RulesError::OutOfBounds { col: 8, row: 2 }.to_string(),
            "coordinates (8, 2) are off the board"
        );

        let location = Location::new(0, 0).unwrap();
        assert_eq!(
            RulesError::IllegalMove {
                location,
                color: Color::White
            }
            .to_string(),
            "White cannot play at A1"
        );
        assert_eq!(
            RulesError::IllegalPass {
                color: Color::Black
            }
            .to_string(),
            "Black cannot pass while a legal move exists"
        );
    }
}

//! The eight scan directions and lazy rays along them.

use crate::{Location, EDGE_LENGTH};

/// A unit step on the board: `dx` moves between columns, `dy` between rows.
/// The only directions are the eight in [`DIRECTIONS`], so every [`Ray`] is finite.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Direction {
    dx: i8,
    dy: i8,
}

/// All eight directions, clockwise from the south-east diagonal.
pub static DIRECTIONS: [Direction; 8] = [
    Direction::new(1, 1),
    Direction::new(1, 0),
    Direction::new(1, -1),
    Direction::new(0, -1),
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
    Direction::new(0, 1),
];

impl Direction {
    pub(crate) const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    /// The column step, one of -1, 0 or 1.
    #[inline]
    pub fn dx(self) -> i8 {
        self.dx
    }

    /// The row step, one of -1, 0 or 1.
    #[inline]
    pub fn dy(self) -> i8 {
        self.dy
    }
}

impl Location {
    /// The neighbouring square one step in `direction`, if it is on the board.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Location> {
        let col = self.col() as isize + direction.dx as isize;
        let row = self.row() as isize + direction.dy as isize;
        let edge = EDGE_LENGTH as isize;

        if (0..edge).contains(&col) && (0..edge).contains(&row) {
            Some(Location::new_unchecked(col as u8, row as u8))
        } else {
            None
        }
    }

    /// The squares from this one (exclusive) to the edge of the board in `direction`.
    #[inline]
    pub fn ray(self, direction: Direction) -> Ray {
        Ray {
            current: self,
            direction,
        }
    }
}

/// Lazily yields the squares along a [`Direction`] until the edge of the board.
/// Never yields its origin.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    current: Location,
    direction: Direction,
}

impl Iterator for Ray {
    type Item = Location;

    #[inline]
    fn next(&mut self) -> Option<Location> {
        let next = self.current.step(self.direction)?;
        self.current = next;
        Some(next)
    }
}

impl std::iter::FusedIterator for Ray {}

//! Controllers choose the actions for one side of a game.

mod controller;
mod human;
mod random;

pub use controller::Controller;
pub use human::HumanController;
pub use random::RandomController;

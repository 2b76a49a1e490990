//! Game rules for noughts and crosses.
//!
//! Pure functions deriving the game phase from a board snapshot. They
//! never touch a [`GameState`](crate::GameState), so the live game and the
//! search share them.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_draw;
pub use outcome::{Outcome, outcome_of};
pub use win::{check_winner, winning_line};

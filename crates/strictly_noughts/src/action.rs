//! Moves and the ways they are rejected.
//!
//! Every [`MoveError`] is an invalid move: the state is left untouched and
//! the caller decides whether to ignore it (a stray click) or to treat it
//! as a bug.

use super::search::SearchError;
use super::{GamePhase, Player, Position};
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell receiving the mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Coordinates outside the 3x3 grid.
    #[display("Cell ({}, {}) is outside the grid", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell at the position is already occupied.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The game has reached a terminal phase.
    #[display("Game is already over ({})", _0)]
    GameOver(#[error(not(source))] GamePhase),

    /// Human input arrived while the computer holds the move.
    #[display("{} cannot move now", _0)]
    NotYourTurn(#[error(not(source))] Player),

    /// The computer was asked to move on a human's turn or in two-player mode.
    #[display("The computer does not hold the move")]
    NotComputersTurn,

    /// The opponent search refused the position.
    #[display("Search failed: {}", _0)]
    Search(SearchError),

    /// A postcondition failed after the move was applied.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

impl From<SearchError> for MoveError {
    fn from(err: SearchError) -> Self {
        MoveError::Search(err)
    }
}

/// Mode selection attempted after the game's first move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Mode can only be chosen before the first move ({} played)", moves_played)]
pub struct ModeLocked {
    /// Moves already on the board.
    pub moves_played: usize,
}

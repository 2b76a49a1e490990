//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, move)} move {Q(before, after)}. Preconditions run on every
//! move; postconditions run in debug builds.

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::{GameState, Mode, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: raw coordinates fall inside the grid.
pub struct InBounds;

impl InBounds {
    /// Converts validated coordinates into a [`Position`].
    #[instrument]
    pub fn check(row: usize, col: usize) -> Result<Position, MoveError> {
        Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })
    }
}

/// Precondition: the game is still running.
pub struct GameRunning;

impl GameRunning {
    /// Fails with [`MoveError::GameOver`] in a terminal phase.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.phase().is_terminal() {
            Err(MoveError::GameOver(game.phase()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: in single-player mode, human input only on the human's turn.
pub struct HumansTurn;

impl HumansTurn {
    /// Fails with [`MoveError::NotYourTurn`] while the computer holds the move.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.mode() == Mode::SinglePlayer && game.turn() == *game.config().computer() {
            Err(MoveError::NotYourTurn(game.turn()))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the mover is the player whose turn it is.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::NotYourTurn`] for an out-of-turn mover.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if mov.player != game.turn() {
            Err(MoveError::NotYourTurn(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] when the cell is taken.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if !game.board().is_empty(mov.position) {
            Err(MoveError::CellOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: running game, mover's turn, empty cell.
///
/// Checked for every committed move. Coordinate bounds ([`InBounds`]) and
/// the human/computer split ([`HumansTurn`]) apply only to human input and
/// are checked by [`GameState::apply_move`] before this runs.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameRunning::check(game)?;
        PlayersTurn::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - exactly one cell changed, from empty to the mover's mark
/// - history grew by exactly that move
/// - every [`GameInvariants`] member holds
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let changed: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|pos| before.board().get(*pos) != after.board().get(*pos))
            .collect();

        let single_mutation = match (changed.as_slice(), after.history().last()) {
            ([pos], Some(last)) => {
                *pos == last.position
                    && before.board().is_empty(*pos)
                    && after.board().get(*pos) == last.player.mark()
                    && after.history().len() == before.history().len() + 1
            }
            _ => false,
        };
        if !single_mutation {
            warn!(changed = changed.len(), "Move did not change exactly one empty cell");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: a move changes exactly one empty cell".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated after move");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

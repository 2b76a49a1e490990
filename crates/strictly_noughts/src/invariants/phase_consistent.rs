//! Phase consistency invariant: stored phase and line match the board.

use super::super::GameState;
use super::super::rules::outcome_of;
use super::Invariant;

/// Invariant: the recorded phase and winning line equal `outcome_of(board)`.
pub struct PhaseConsistentInvariant;

impl Invariant<GameState> for PhaseConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let outcome = outcome_of(game.board());
        outcome.phase() == game.phase() && outcome.line() == game.winning_line()
    }

    fn description() -> &'static str {
        "Phase and winning line agree with the board"
    }
}

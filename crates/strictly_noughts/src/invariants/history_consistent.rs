//! History consistency invariant: the board is exactly the replayed history.

use super::super::{Board, GameState, Player};
use super::Invariant;

/// Invariant: replaying the history onto an empty board rebuilds the board.
///
/// Moves alternate starting with X, each lands on an empty cell, and no
/// cell is filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();
        let mut expected = Player::X;

        for mov in game.history() {
            if mov.player != expected || !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, mov.player.mark());
            expected = expected.opponent();
        }

        reconstructed == *game.board() && game.turn() == expected
    }

    fn description() -> &'static str {
        "Board matches the alternating move history"
    }
}

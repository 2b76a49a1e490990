//! Mark balance invariant: X leads O by zero or one, matching the turn.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 when X is to move and 1 when O is.
///
/// X always moves first and turns alternate strictly, so the mark counts
/// alone determine whose turn it is.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count_player(Player::X);
        let o = game.board().count_player(Player::O);
        match game.turn() {
            Player::X => x == o,
            Player::O => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "X leads O by one mark exactly when O is to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(MarkBalanceInvariant::holds(&GameState::default()));
    }

    #[test]
    fn test_holds_after_each_move() {
        let mut game = GameState::default();
        for (row, col) in [(0, 0), (1, 1), (2, 2)] {
            game.apply_move(row, col).unwrap();
            assert!(MarkBalanceInvariant::holds(&game));
        }
        assert_eq!(game.turn(), Player::O);
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut game = GameState::default();
        game.board.set(Position::Center, Mark::X);
        assert!(!MarkBalanceInvariant::holds(&game));
    }
}

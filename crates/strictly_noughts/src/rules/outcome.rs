//! Phase and winning line derived from a board snapshot.

use super::super::{Board, GamePhase, WinningLine};
use super::draw::is_draw;
use super::win::winning_line;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What a board says about the game: its phase and, for a win, the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Outcome {
    phase: GamePhase,
    line: Option<WinningLine>,
}

impl Outcome {
    /// Outcome of a game still in play.
    pub fn running() -> Self {
        Self::new(GamePhase::Running, None)
    }

    /// The phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The completed line; `None` while running or drawn.
    pub fn line(&self) -> Option<WinningLine> {
        self.line
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Self::running()
    }
}

/// Re-derives phase and winning line from `board` without side effects.
///
/// A completed line decides the phase; otherwise a drawn board (see
/// [`is_draw`]) ends the game and anything else is still running.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn outcome_of(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        return Outcome::new(GamePhase::won_by(player), Some(line));
    }
    if is_draw(board) {
        return Outcome::new(GamePhase::Draw, None);
    }
    Outcome::running()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_running() {
        assert_eq!(outcome_of(&Board::new()), Outcome::running());
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::parse("XOX/OXO/OXO").unwrap();
        let outcome = outcome_of(&board);
        assert_eq!(outcome.phase(), GamePhase::Draw);
        assert_eq!(outcome.line(), None);
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        let board = Board::parse("XOX/OXO/OXX").unwrap();
        let outcome = outcome_of(&board);
        assert_eq!(outcome.phase(), GamePhase::XWon);
        assert_eq!(outcome.line(), Some(WinningLine::diagonal()));
    }

    #[test]
    fn test_draw_phase_agrees_with_is_draw() {
        for text in ["XOX/OXO/OXO", "XOX/OXO/OXX", "XOX/OXO/OX.", "........."] {
            let board = Board::parse(text).unwrap();
            assert_eq!(
                outcome_of(&board).phase() == GamePhase::Draw,
                is_draw(&board),
                "{text}"
            );
        }
    }

    #[test]
    fn test_win_before_board_fills() {
        let board = Board::parse("OOO/XX./X..").unwrap();
        let outcome = outcome_of(&board);
        assert_eq!(outcome.phase(), GamePhase::OWon);
        assert_eq!(outcome.line(), Some(WinningLine::row(0)));
    }
}

//! Exhaustive minimax opponent.
//!
//! The search explores the full game tree with no pruning and no depth
//! limit: a completed line ends a branch immediately, and a 3x3 board
//! runs out of cells after nine plies anyway.
//!
//! Exploration places and removes marks on a private copy of the board.
//! Each placement is held by a [`Probe`] guard that clears the cell when
//! dropped, so every exit path restores the scratch board.

use super::rules::{check_winner, outcome_of};
use super::{Board, GamePhase, Mark, Player, Position};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Value of a position the computer has won.
pub const WIN_SCORE: i32 = 10;

/// Search invoked on a position with nothing left to decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SearchError {
    /// A line is already complete.
    #[display("Game is already over ({})", _0)]
    GameOver(#[error(not(source))] GamePhase),
    /// Every cell is taken.
    #[display("No empty cell left to play")]
    BoardFull,
}

/// Static value of `board` for `computer`.
///
/// `+WIN_SCORE` when the computer has a completed line, `-WIN_SCORE` when
/// its opponent does, `0` for everything else including draws.
pub fn evaluate(board: &Board, computer: Player) -> i32 {
    match check_winner(board) {
        Some(winner) if winner == computer => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => 0,
    }
}

/// Minimax value of `board` for `computer`.
///
/// `is_maximizing` says whether the computer moves next. The caller's
/// board is not touched.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn minimax(board: &Board, is_maximizing: bool, computer: Player) -> i32 {
    let mut scratch = *board;
    let mut search = Search::new(computer);
    let value = search.minimax(&mut scratch, is_maximizing);
    debug!(value, nodes = search.nodes, "Minimax complete");
    value
}

/// Minimax value of every legal move for `computer`, in row-major order.
///
/// Each value is the minimax value of the position after the computer
/// plays that cell, with the opponent to move.
///
/// # Errors
///
/// [`SearchError::GameOver`] if a line is already complete,
/// [`SearchError::BoardFull`] if no cell is empty.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn move_values(board: &Board, computer: Player) -> Result<Vec<(Position, i32)>, SearchError> {
    let outcome = outcome_of(board);
    match outcome.phase() {
        GamePhase::Running => {}
        GamePhase::Draw => return Err(SearchError::BoardFull),
        terminal => return Err(SearchError::GameOver(terminal)),
    }

    let mut scratch = *board;
    let mut search = Search::new(computer);
    let mut values = Vec::with_capacity(9);
    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        let mut probe = Probe::place(&mut scratch, pos, computer);
        let value = search.minimax(&mut probe, false);
        values.push((pos, value));
    }

    debug!(nodes = search.nodes, candidates = values.len(), "Move values computed");
    Ok(values)
}

/// Picks the computer's move.
///
/// Returns the first cell, in row-major order, whose value is strictly
/// greater than every cell before it. The caller's board is never mutated
/// and the result depends only on the arguments.
///
/// # Errors
///
/// See [`move_values`]; both errors mean the caller asked for a move in a
/// position where none is due.
#[instrument(skip(board), fields(board = %board.display()))]
pub fn select_computer_move(board: &Board, computer: Player) -> Result<Position, SearchError> {
    let mut best: Option<(Position, i32)> = None;
    for (pos, value) in move_values(board, computer)? {
        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((pos, value));
        }
    }

    let (position, value) = best.ok_or(SearchError::BoardFull)?;
    debug!(%position, value, "Computer move selected");
    Ok(position)
}

/// Recursive search state.
struct Search {
    computer: Player,
    nodes: u64,
}

impl Search {
    fn new(computer: Player) -> Self {
        Self { computer, nodes: 0 }
    }

    fn minimax(&mut self, board: &mut Board, maximizing: bool) -> i32 {
        self.nodes += 1;

        let score = evaluate(board, self.computer);
        if score != 0 {
            return score;
        }
        if board.is_full() {
            return 0;
        }

        let mover = if maximizing {
            self.computer
        } else {
            self.computer.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            let mut probe = Probe::place(board, pos, mover);
            let value = self.minimax(&mut probe, !maximizing);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        best
    }
}

/// A mark placed for exploration, removed again on drop.
struct Probe<'a> {
    board: &'a mut Board,
    position: Position,
}

impl<'a> Probe<'a> {
    fn place(board: &'a mut Board, position: Position, player: Player) -> Self {
        debug_assert!(board.is_empty(position), "probe on occupied {position}");
        board.set(position, player.mark());
        Self { board, position }
    }
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.set(self.position, Mark::Empty);
    }
}

//! Win detection.

use super::super::{Board, Mark, Player, Position, WinningLine};

/// Winner of the three cells, if they all hold the same player's mark.
fn uniform(board: &Board, cells: [Position; 3]) -> Option<Player> {
    let [a, b, c] = cells.map(|pos| board.get(pos));
    if a != Mark::Empty && a == b && b == c {
        a.player()
    } else {
        None
    }
}

fn cell(row: usize, col: usize) -> Position {
    Position::ALL[row * 3 + col]
}

/// Finds a completed line.
///
/// First match wins: for each index `i` from 0 to 2, row `i` is checked
/// and then column `i`; the main diagonal comes next and the anti-diagonal
/// last. A legal game never has two completed lines, so the order only
/// shows on hand-built boards.
pub fn winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    for i in 0..3 {
        if let Some(player) = uniform(board, [cell(i, 0), cell(i, 1), cell(i, 2)]) {
            return Some((player, WinningLine::row(i)));
        }
        if let Some(player) = uniform(board, [cell(0, i), cell(1, i), cell(2, i)]) {
            return Some((player, WinningLine::column(i)));
        }
    }

    if let Some(player) = uniform(
        board,
        [Position::TopLeft, Position::Center, Position::BottomRight],
    ) {
        return Some((player, WinningLine::diagonal()));
    }

    uniform(
        board,
        [Position::TopRight, Position::Center, Position::BottomLeft],
    )
    .map(|player| (player, WinningLine::anti_diagonal()))
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

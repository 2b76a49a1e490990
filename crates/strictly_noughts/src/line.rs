//! Winning-line geometry.

use super::position::{GRID_SIZE, Position};
use serde::{Deserialize, Serialize};

/// Orientation of a completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Row `i`, left to right.
    Row(usize),
    /// Column `i`, top to bottom.
    Column(usize),
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// The three-in-a-row that ended a game.
///
/// Endpoints are linear cell indices. Rows run left to right, columns top
/// to bottom, the diagonal is `(0, 8)` and the anti-diagonal `(2, 6)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct WinningLine {
    start: usize,
    end: usize,
}

impl WinningLine {
    /// Line spanning row `i`.
    pub fn row(i: usize) -> Self {
        Self::new(i * GRID_SIZE, i * GRID_SIZE + 2)
    }

    /// Line spanning column `i`.
    pub fn column(i: usize) -> Self {
        Self::new(i, 2 * GRID_SIZE + i)
    }

    /// Main diagonal.
    pub fn diagonal() -> Self {
        Self::new(0, 8)
    }

    /// Anti-diagonal, recorded top-right first.
    pub fn anti_diagonal() -> Self {
        Self::new(2, 6)
    }

    /// Linear index of the first endpoint.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Linear index of the second endpoint.
    pub fn end(&self) -> usize {
        self.end
    }

    /// First endpoint as a [`Position`].
    pub fn start_position(&self) -> Option<Position> {
        Position::from_index(self.start)
    }

    /// Second endpoint as a [`Position`].
    pub fn end_position(&self) -> Option<Position> {
        Position::from_index(self.end)
    }

    /// Orientation of the line, derived from the endpoints.
    pub fn kind(&self) -> LineKind {
        let (start_row, start_col) = (self.start / GRID_SIZE, self.start % GRID_SIZE);
        let (end_row, end_col) = (self.end / GRID_SIZE, self.end % GRID_SIZE);
        if start_row == end_row {
            LineKind::Row(start_row)
        } else if start_col == end_col {
            LineKind::Column(start_col)
        } else if start_row == start_col {
            LineKind::Diagonal
        } else {
            LineKind::AntiDiagonal
        }
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

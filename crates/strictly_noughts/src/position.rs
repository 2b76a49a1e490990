//! Named cells of the 3x3 grid.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the grid.
pub const GRID_SIZE: usize = 3;

/// A cell on the board, row-major with the origin at the top-left.
///
/// Coordinates arriving from outside the crate are raw `(row, col)` pairs
/// and are only turned into a `Position` after a bounds check, so every
/// `Position` indexes the grid safely.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All nine positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Linear row-major index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Row of this cell (0-2).
    pub fn row(self) -> usize {
        self.index() / GRID_SIZE
    }

    /// Column of this cell (0-2).
    pub fn col(self) -> usize {
        self.index() % GRID_SIZE
    }

    /// Creates a position from a linear index, `None` when out of range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from grid coordinates, `None` when out of range.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Self::from_index(row * GRID_SIZE + col)
    }

    /// Parse from a label or a linear index (0-8).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        if let Ok(num) = s.trim().parse::<usize>() {
            return Self::from_index(num);
        }

        let s_lower = s.trim().to_lowercase();
        <Position as strum::IntoEnumIterator>::iter().find(|pos| pos.label().to_lowercase() == s_lower)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row(), self.col())
    }
}

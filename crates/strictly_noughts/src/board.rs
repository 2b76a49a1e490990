//! The 3x3 grid.

use super::position::{GRID_SIZE, Position};
use super::types::{Mark, Player};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// 3x3 grid of marks, row-major, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Mark; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit rows.
    ///
    /// No legality check is made; test fixtures use this to build
    /// positions a real game could never reach.
    pub fn from_rows(cells: [[Mark; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Mark at `pos`.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row()][pos.col()]
    }

    /// Overwrites the mark at `pos`.
    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row()][pos.col()] = mark;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Rows of the grid.
    pub fn rows(&self) -> &[[Mark; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().flatten().filter(|m| **m == mark).count()
    }

    /// Number of cells holding `player`'s mark.
    pub fn count_player(&self, player: Player) -> usize {
        self.count(player.mark())
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        GRID_SIZE * GRID_SIZE - self.count(Mark::Empty)
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|m| !m.is_empty())
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }

    /// The same board with every X and O exchanged.
    pub fn swapped(&self) -> Self {
        let mut cells = self.cells;
        for mark in cells.iter_mut().flatten() {
            *mark = mark.swapped();
        }
        Self { cells }
    }

    /// Formats the board as three rows of text, `.` for empty cells.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| row.iter().map(|m| m.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Parses nine cells from text.
    ///
    /// `X` and `O` (either case) are marks, `.` and `_` are empty cells.
    /// Whitespace, `/` and `|` separate rows and are skipped.
    #[instrument]
    pub fn parse(text: &str) -> Result<Self, BoardParseError> {
        let mut marks = Vec::with_capacity(GRID_SIZE * GRID_SIZE);
        for (offset, c) in text.chars().enumerate() {
            let mark = match c {
                'x' | 'X' => Mark::X,
                'o' | 'O' => Mark::O,
                '.' | '_' => Mark::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                other => {
                    return Err(BoardParseError::InvalidCharacter {
                        character: other,
                        offset,
                    });
                }
            };
            marks.push(mark);
        }

        if marks.len() != GRID_SIZE * GRID_SIZE {
            return Err(BoardParseError::WrongCellCount { got: marks.len() });
        }

        let mut board = Self::new();
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, mark);
        }
        Ok(board)
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// Text did not describe exactly nine cells.
    #[display("Expected 9 cells, found {}", got)]
    WrongCellCount {
        /// Cells found.
        got: usize,
    },
    /// A character that is neither a mark nor a separator.
    #[display("Invalid character {:?} at offset {}", character, offset)]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Character offset in the input.
        offset: usize,
    },
}

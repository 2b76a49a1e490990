//! Core domain types for noughts and crosses.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark this player leaves on the board.
    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// Content of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell marked by X.
    X,
    /// Cell marked by O.
    O,
}

impl Mark {
    /// Returns the owning player, or `None` for an empty cell.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    /// Returns true for [`Mark::Empty`].
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Exchanges X and O, leaving empty cells alone.
    pub fn swapped(self) -> Self {
        match self {
            Mark::Empty => Mark::Empty,
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character rendering used by [`Board::display`](crate::Board::display).
    pub fn symbol(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

/// Whether the second seat is a human or the computer.
///
/// Chosen before the first move of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// One human against the minimax opponent.
    SinglePlayer,
    /// Two humans sharing the board.
    #[default]
    TwoPlayer,
}

/// Game phase state machine.
///
/// `Running` is the only initial state. The three terminal states have no
/// outgoing transitions other than an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display)]
pub enum GamePhase {
    /// Moves are being accepted.
    #[default]
    #[display("Running")]
    Running,
    /// X completed a line.
    #[display("X Wins")]
    XWon,
    /// O completed a line.
    #[display("O Wins")]
    OWon,
    /// Board filled without a line.
    #[display("Draw")]
    Draw,
}

impl GamePhase {
    /// Phase reached when `player` completes a line.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => GamePhase::XWon,
            Player::O => GamePhase::OWon,
        }
    }

    /// Returns true for XWon, OWon and Draw.
    pub fn is_terminal(self) -> bool {
        self != GamePhase::Running
    }

    /// Returns the winner if the phase records one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GamePhase::XWon => Some(Player::X),
            GamePhase::OWon => Some(Player::O),
            GamePhase::Running | GamePhase::Draw => None,
        }
    }

    /// Phase seen from the other side of the board (XWon and OWon exchange).
    pub fn swapped(self) -> Self {
        match self {
            GamePhase::XWon => GamePhase::OWon,
            GamePhase::OWon => GamePhase::XWon,
            other => other,
        }
    }

    /// Status text shown beneath the grid.
    ///
    /// While running this names the player to move, otherwise the result.
    pub fn status_line(self, turn: Player) -> String {
        match self {
            GamePhase::Running => format!("{}'s Turn", turn),
            terminal => terminal.to_string(),
        }
    }
}

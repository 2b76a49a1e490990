//! Strictly Noughts - noughts and crosses engine with a minimax opponent
//!
//! # Architecture
//!
//! - **State engine**: [`GameState`] owns the board, turn, phase, mode and
//!   winning line, and accepts moves through validated contracts.
//! - **Rules**: [`outcome_of`] re-derives phase and winning line from any
//!   board snapshot.
//! - **Search**: [`select_computer_move`] runs an exhaustive minimax over a
//!   borrowed board and returns the computer's move.
//!
//! Rendering, input devices and the main loop belong to the driver; the
//! engine only takes grid coordinates in and hands state back out.
//!
//! # Example
//!
//! ```
//! use strictly_noughts::{GameConfig, GamePhase, GameState, Mode, Position};
//!
//! let mut game = GameState::new(GameConfig::new().with_mode(Mode::SinglePlayer));
//! assert_eq!(game.apply_move(0, 0), Ok(GamePhase::Running));
//!
//! let (reply, phase) = game.play_computer_turn().unwrap();
//! assert_eq!(reply, Position::Center);
//! assert_eq!(phase, GamePhase::Running);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod game;
mod line;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;
pub mod search;

pub use action::{ModeLocked, Move, MoveError};
pub use board::{Board, BoardParseError};
pub use config::{ConfigError, GameConfig, ResetPolicy};
pub use game::GameState;
pub use line::{LineKind, WinningLine};
pub use position::{GRID_SIZE, Position};
pub use rules::{Outcome, outcome_of};
pub use search::{SearchError, WIN_SCORE, evaluate, minimax, move_values, select_computer_move};
pub use types::{GamePhase, Mark, Mode, Player};

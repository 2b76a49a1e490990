//! The live game aggregate.

use super::action::{ModeLocked, Move, MoveError};
use super::config::{GameConfig, ResetPolicy};
use super::contracts::{Contract, GameRunning, HumansTurn, InBounds, MoveContract};
use super::rules::{Outcome, outcome_of};
use super::search::select_computer_move;
use super::{Board, GamePhase, Mode, Player, Position, WinningLine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One game of noughts and crosses.
///
/// Owns the board, the player to move, the phase, the mode and the winning
/// line. The driver constructs one instance and passes it by reference;
/// every accepted move and every reset mutates it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) phase: GamePhase,
    pub(crate) mode: Mode,
    pub(crate) winning_line: Option<WinningLine>,
    pub(crate) history: Vec<Move>,
    pub(crate) config: GameConfig,
}

impl GameState {
    /// Creates a new game in the configured mode.
    #[instrument]
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            phase: GamePhase::Running,
            mode: *config.mode(),
            winning_line: None,
            history: Vec::new(),
            config,
        }
    }

    /// Rebuilds a game by playing `moves` in order from an empty board.
    ///
    /// Turn order is implied; the human/computer split is not enforced.
    #[instrument]
    pub fn replay(config: GameConfig, moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new(config);
        for pos in moves {
            game.commit(Move::new(game.turn, *pos))?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the completed line, set only in XWon and OWon.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Moves played since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Phase and winning line as one value.
    pub fn outcome(&self) -> Outcome {
        Outcome::new(self.phase, self.winning_line)
    }

    /// Status text for the driver ("X's Turn", "O Wins", ...).
    pub fn status_line(&self) -> String {
        self.phase.status_line(self.turn)
    }

    /// The computer's mark, or `None` in two-player mode.
    pub fn computer(&self) -> Option<Player> {
        match self.mode {
            Mode::SinglePlayer => Some(*self.config.computer()),
            Mode::TwoPlayer => None,
        }
    }

    /// True when the driver should call [`GameState::play_computer_turn`].
    pub fn is_computers_turn(&self) -> bool {
        self.phase == GamePhase::Running && self.computer() == Some(self.turn)
    }

    /// Chooses single- or two-player mode.
    ///
    /// # Errors
    ///
    /// [`ModeLocked`] once a move has been played in this game.
    #[instrument(skip(self))]
    pub fn select_mode(&mut self, mode: Mode) -> Result<(), ModeLocked> {
        if !self.history.is_empty() {
            warn!(moves_played = self.history.len(), "Mode change rejected");
            return Err(ModeLocked {
                moves_played: self.history.len(),
            });
        }
        info!(?mode, "Mode selected");
        self.mode = mode;
        Ok(())
    }

    /// Places the current player's mark at `(row, col)` on behalf of a human.
    ///
    /// On success the turn passes to the other player and the new phase is
    /// returned. On any error nothing changes.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`], [`MoveError::GameOver`],
    /// [`MoveError::NotYourTurn`] (the computer's turn in single-player
    /// mode) or [`MoveError::CellOccupied`].
    #[instrument(skip(self), fields(turn = %self.turn, phase = %self.phase))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GamePhase, MoveError> {
        let position = InBounds::check(row, col)?;
        GameRunning::check(self)?;
        HumansTurn::check(self)?;
        self.commit(Move::new(self.turn, position))
    }

    /// Lets the computer choose and play its move.
    ///
    /// The move goes through the same validation and commit path as
    /// [`GameState::apply_move`].
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] in a terminal phase,
    /// [`MoveError::NotComputersTurn`] in two-player mode or on the human's
    /// turn.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play_computer_turn(&mut self) -> Result<(Position, GamePhase), MoveError> {
        GameRunning::check(self)?;
        if !self.is_computers_turn() {
            return Err(MoveError::NotComputersTurn);
        }
        let position = select_computer_move(&self.board, self.turn)?;
        let phase = self.commit(Move::new(self.turn, position))?;
        Ok((position, phase))
    }

    /// Returns the game to its initial state.
    ///
    /// The board is cleared, X moves first and the phase is Running. The
    /// mode is kept or reverted according to the configured
    /// [`ResetPolicy`].
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn reset(&mut self) {
        let mode = match self.config.reset_policy() {
            ResetPolicy::KeepMode => self.mode,
            ResetPolicy::RevertMode => *self.config.mode(),
        };
        *self = Self {
            mode,
            ..Self::new(self.config)
        };
        info!(?mode, "Game reset");
    }

    /// Validates and applies one move, then re-derives the phase.
    fn commit(&mut self, mov: Move) -> Result<GamePhase, MoveError> {
        MoveContract::pre(self, &mov).inspect_err(|e| debug!(%mov, error = %e, "Move rejected"))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(mov.position, mov.player.mark());
        self.history.push(mov);
        self.turn = mov.player.opponent();
        let outcome = outcome_of(&self.board);
        self.phase = outcome.phase();
        self.winning_line = outcome.line();

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        debug!(%mov, phase = %self.phase, "Move applied");
        Ok(self.phase)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_player() -> GameState {
        GameState::new(GameConfig::new().with_mode(Mode::SinglePlayer))
    }

    #[test]
    fn test_move_flips_turn() {
        let mut game = GameState::default();
        assert_eq!(game.apply_move(1, 1), Ok(GamePhase::Running));
        assert_eq!(game.turn(), Player::O);
        assert_eq!(game.board().get(Position::Center), crate::Mark::X);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut game = GameState::default();
        assert_eq!(
            game.apply_move(3, 0),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(game, GameState::default());
    }

    #[test]
    fn test_select_mode_locks_after_first_move() {
        let mut game = GameState::default();
        assert!(game.select_mode(Mode::SinglePlayer).is_ok());
        assert_eq!(game.mode(), Mode::SinglePlayer);
        game.apply_move(0, 0).unwrap();
        assert_eq!(
            game.select_mode(Mode::TwoPlayer),
            Err(ModeLocked { moves_played: 1 })
        );
        assert_eq!(game.mode(), Mode::SinglePlayer);
    }

    #[test]
    fn test_human_cannot_move_for_computer() {
        let mut game = single_player();
        game.apply_move(0, 0).unwrap();
        let snapshot = game.clone();
        assert_eq!(
            game.apply_move(1, 1),
            Err(MoveError::NotYourTurn(Player::O))
        );
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_computer_replies() {
        let mut game = single_player();
        game.apply_move(0, 0).unwrap();
        assert!(game.is_computers_turn());
        let (position, phase) = game.play_computer_turn().unwrap();
        // Only the center holds the draw against a corner opening.
        assert_eq!(position, Position::Center);
        assert_eq!(phase, GamePhase::Running);
        assert_eq!(game.turn(), Player::X);
        assert!(!game.is_computers_turn());
    }

    #[test]
    fn test_computer_waits_for_its_turn() {
        let mut game = single_player();
        assert_eq!(game.play_computer_turn(), Err(MoveError::NotComputersTurn));
        let mut two = GameState::default();
        two.apply_move(0, 0).unwrap();
        assert_eq!(two.play_computer_turn(), Err(MoveError::NotComputersTurn));
    }

    #[test]
    fn test_computer_can_open_as_x() {
        let config = GameConfig::new()
            .with_mode(Mode::SinglePlayer)
            .with_computer(Player::X);
        let mut game = GameState::new(config);
        assert!(game.is_computers_turn());
        assert_eq!(
            game.apply_move(1, 1),
            Err(MoveError::NotYourTurn(Player::X))
        );
        let (position, _) = game.play_computer_turn().unwrap();
        assert_eq!(position, Position::TopLeft);
    }

    #[test]
    fn test_reset_keeps_mode_by_default() {
        let mut game = GameState::default();
        game.select_mode(Mode::SinglePlayer).unwrap();
        game.apply_move(0, 0).unwrap();
        game.reset();
        assert_eq!(game.mode(), Mode::SinglePlayer);
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Player::X);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_reset_reverts_mode_when_configured() {
        let config = GameConfig::new().with_reset_policy(ResetPolicy::RevertMode);
        let mut game = GameState::new(config);
        game.select_mode(Mode::SinglePlayer).unwrap();
        game.apply_move(0, 0).unwrap();
        game.reset();
        assert_eq!(game.mode(), Mode::TwoPlayer);
    }

    #[test]
    fn test_status_line_follows_game() {
        let mut game = GameState::default();
        assert_eq!(game.status_line(), "X's Turn");
        game.apply_move(0, 0).unwrap();
        assert_eq!(game.status_line(), "O's Turn");
    }
}

//! Game configuration.

use super::{Mode, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// What [`GameState::reset`](crate::GameState::reset) does with the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// The selected mode survives a reset.
    #[default]
    KeepMode,
    /// A reset returns to the configured mode.
    RevertMode,
}

/// Settings fixed for the lifetime of a [`GameState`](crate::GameState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Mode a fresh game starts in.
    #[serde(default)]
    mode: Mode,

    /// The computer's mark in single-player mode.
    #[serde(default = "default_computer")]
    computer: Player,

    /// Whether a reset keeps the selected mode.
    #[serde(default)]
    reset_policy: ResetPolicy,

    /// Pause a driver inserts before showing the computer's reply.
    #[serde(default = "default_reply_delay_ms")]
    reply_delay_ms: u64,
}

#[instrument]
fn default_computer() -> Player {
    Player::O
}

#[instrument]
fn default_reply_delay_ms() -> u64 {
    500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            computer: default_computer(),
            reset_policy: ResetPolicy::default(),
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

impl GameConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply delay as a [`Duration`].
    ///
    /// The engine never sleeps; this is for the driver.
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(mode = ?config.mode, computer = %config.computer, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(*config.mode(), Mode::TwoPlayer);
        assert_eq!(*config.computer(), Player::O);
        assert_eq!(*config.reset_policy(), ResetPolicy::KeepMode);
        assert_eq!(config.reply_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_full_toml() {
        let config = GameConfig::from_toml_str(
            r#"
            mode = "single_player"
            computer = "x"
            reset_policy = "revert_mode"
            reply_delay_ms = 0
            "#,
        )
        .unwrap();
        assert_eq!(*config.mode(), Mode::SinglePlayer);
        assert_eq!(*config.computer(), Player::X);
        assert_eq!(*config.reset_policy(), ResetPolicy::RevertMode);
        assert_eq!(config.reply_delay(), Duration::ZERO);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = GameConfig::from_toml_str("difficulty = 3").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_setters_chain() {
        let config = GameConfig::new()
            .with_mode(Mode::SinglePlayer)
            .with_computer(Player::X);
        assert_eq!(*config.mode(), Mode::SinglePlayer);
        assert_eq!(*config.computer(), Player::X);
    }
}

//! Player configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::Roster;
use tracing::{debug, info, instrument};

/// Config file read when no path is given, if present.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Names of the two players.
///
/// Player one always plays X and opens every session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Name of the player holding X.
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Name of the player holding O.
    #[serde(default = "default_player_two")]
    player_two: String,
}

fn default_player_one() -> String {
    "player1".to_string()
}

fn default_player_two() -> String {
    "player2".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
        }
    }
}

impl GameConfig {
    /// Creates a configuration from two names.
    pub fn new(player_one: impl Into<String>, player_two: impl Into<String>) -> Self {
        Self {
            player_one: player_one.into(),
            player_two: player_two.into(),
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(player_one = %config.player_one, player_two = %config.player_two, "Config loaded");
        Ok(config)
    }

    /// Loads the explicit file if given; otherwise [`DEFAULT_CONFIG_PATH`]
    /// when it exists, and defaults when it doesn't.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces names with any that were given on the command line.
    #[must_use]
    pub fn with_overrides(mut self, player_one: Option<String>, player_two: Option<String>) -> Self {
        if let Some(name) = player_one {
            self.player_one = name;
        }
        if let Some(name) = player_two {
            self.player_two = name;
        }
        self
    }

    /// Checks that both names are non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.roster().map(|_| ())
    }

    /// Builds the session roster.
    pub fn roster(&self) -> Result<Roster, ConfigError> {
        Roster::new(self.player_one.as_str(), self.player_two.as_str())
            .map_err(|e| ConfigError::new(format!("Invalid players: {}", e)))
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

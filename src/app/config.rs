//! Configuration for a playing session.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Configuration for joining and playing one game.
///
/// # Examples
///
/// ```
/// use uttt::app::ClientConfig;
///
/// let config = ClientConfig::new("alice")
///     .with_game_id("local-1")
///     .with_auto_pair(true)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Name to register under; also used to find our own token
    pub player_name: String,
    /// Existing game to join (a new game is created when absent)
    pub game_id: Option<String>,
    /// Ask the server to pair us with a robot
    pub auto_pair: bool,
    /// Upper bound on loop iterations (moves plus polls)
    pub max_turns: usize,
    /// Delay between polls while waiting for the opponent
    pub poll_interval_ms: u64,
    /// Random seed for the local server
    pub seed: Option<u64>,
}

impl ClientConfig {
    /// Create a configuration for the given player.
    ///
    /// Uses default values for other parameters:
    /// - Game: None (create a new one)
    /// - Auto pair: false
    /// - Max turns: 200
    /// - Poll interval: 500 ms
    /// - Seed: None (non-deterministic)
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            ..Self::default()
        }
    }

    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid JSON.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Set the game to join.
    pub fn with_game_id(mut self, game_id: impl Into<String>) -> Self {
        self.game_id = Some(game_id.into());
        self
    }

    /// Set whether to request a robot partner.
    pub fn with_auto_pair(mut self, auto_pair: bool) -> Self {
        self.auto_pair = auto_pair;
        self
    }

    /// Set the loop iteration bound.
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the poll delay in milliseconds.
    pub fn with_poll_interval_ms(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] for an empty player name
    /// or a zero turn bound.
    pub fn validate(&self) -> Result<()> {
        if self.player_name.trim().is_empty() {
            return Err(crate::Error::InvalidConfiguration {
                message: "player name must not be empty".to_string(),
            });
        }
        if self.max_turns == 0 {
            return Err(crate::Error::InvalidConfiguration {
                message: "max_turns must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            player_name: String::new(),
            game_id: None,
            auto_pair: false,
            max_turns: 200,
            poll_interval_ms: 500,
            seed: None,
        }
    }
}

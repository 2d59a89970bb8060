//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strictly_tictactoe::Mark;
use tracing::{debug, info, instrument};

/// Longest thinking delay accepted from configuration.
pub const MAX_THINKING_DELAY_MS: u64 = 10_000;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Turn order.
    game: GameConfig,
    /// Computer opponent behaviour.
    computer: ComputerConfig,
    /// Log output.
    logging: LoggingConfig,
}

/// Turn-order policy.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Mark that opens every game.
    first_player: Mark,

    /// Mark played by the human. When unset the UI asks before each game.
    human_side: Option<Mark>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: Mark::X,
            human_side: None,
        }
    }
}

/// Computer opponent settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputerConfig {
    /// Pause before the computer plays, in milliseconds.
    thinking_delay_ms: u64,
}

impl Default for ComputerConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: 1000,
        }
    }
}

impl ComputerConfig {
    /// Thinking delay as a [`Duration`].
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

/// Logging settings for the terminal UI.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset.
    filter: String,

    /// File receiving log output while the terminal UI is running.
    file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            file: PathBuf::from("strictly_minimax.log"),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(
            first_player = %config.game.first_player,
            delay_ms = config.computer.thinking_delay_ms,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks value ranges.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.computer.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(ConfigError::new(format!(
                "computer.thinking_delay_ms must be at most {}",
                MAX_THINKING_DELAY_MS
            )));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::new(
                "logging.filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Overrides the opening mark.
    pub fn with_first_player(mut self, first_player: Mark) -> Self {
        self.game.first_player = first_player;
        self
    }

    /// Overrides the human's mark.
    pub fn with_human_side(mut self, human_side: Mark) -> Self {
        self.game.human_side = Some(human_side);
        self
    }

    /// Overrides the thinking delay.
    pub fn with_thinking_delay_ms(mut self, delay_ms: u64) -> Self {
        self.computer.thinking_delay_ms = delay_ms;
        self
    }

    /// Renders the default configuration as TOML.
    pub fn default_toml() -> Result<String, ConfigError> {
        toml::to_string_pretty(&Self::default())
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

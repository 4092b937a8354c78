//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_session::DEFAULT_HISTORY_CAPACITY;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for the terminal front end.
///
/// Every field has a default, so an empty file is a valid config.
///
/// ```toml
/// history_capacity = 5
/// show_indices = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Finished games kept in the history list.
    #[serde(default = "default_history_capacity")]
    history_capacity: usize,

    /// Show cell indices in empty cells.
    #[serde(default = "default_show_indices")]
    show_indices: bool,
}

/// Largest accepted `history_capacity`.
pub const MAX_HISTORY_CAPACITY: usize = 1000;

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_show_indices() -> bool {
    true
}

impl AppConfig {
    /// Creates a configuration.
    pub fn new(history_capacity: usize, show_indices: bool) -> Self {
        Self {
            history_capacity,
            show_indices,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            history_capacity = config.history_capacity,
            show_indices = config.show_indices,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if !(1..=MAX_HISTORY_CAPACITY).contains(&config.history_capacity) {
            return Err(ConfigError::new(format!(
                "history_capacity must be between 1 and {}, got {}",
                MAX_HISTORY_CAPACITY, config.history_capacity
            )));
        }
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(default_history_capacity(), default_show_indices())
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

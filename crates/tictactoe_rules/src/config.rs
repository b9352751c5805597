//! Rules configuration.

use crate::error::ConfigError;
use crate::rules::WinLines;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Tunable rules for a game.
///
/// ```toml
/// win_lines = "rows_only"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    /// Which lines count towards a win.
    win_lines: WinLines,
}

impl RulesConfig {
    /// Creates a configuration with the given win-line mode.
    #[instrument]
    pub fn new(win_lines: WinLines) -> Self {
        Self { win_lines }
    }

    /// Parses configuration from a TOML string.
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
        info!(win_lines = ?config.win_lines, "Config loaded successfully");
        Ok(config)
    }
}

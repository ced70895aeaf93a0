//! Game configuration loaded from TOML and overridden by the command line.

use crate::cli::Cli;
use crate::language::Language;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for one program run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Interface language.
    #[serde(default)]
    language: Language,

    /// How long the splash screen stays up, in milliseconds. Zero skips it.
    #[serde(default = "default_splash_delay_ms")]
    splash_delay_ms: u64,

    /// Draw marks in color.
    #[serde(default = "default_true")]
    color: bool,

    /// Clear the screen between views.
    #[serde(default = "default_true")]
    clear_screen: bool,

    /// Seed for the computer opponent; random when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_splash_delay_ms() -> u64 {
    2500
}

#[instrument]
fn default_true() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            splash_delay_ms: default_splash_delay_ms(),
            color: default_true(),
            clear_screen: default_true(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(language = %config.language, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` when given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self, cli))]
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(language) = cli.language {
            self.language = language;
        }
        if cli.no_splash {
            self.splash_delay_ms = 0;
        }
        if cli.no_color {
            self.color = false;
        }
        if cli.no_clear {
            self.clear_screen = false;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        debug!(config = ?self, "Applied command-line overrides");
        self
    }

    /// Splash delay as a duration.
    pub fn splash_delay(&self) -> Duration {
        Duration::from_millis(self.splash_delay_ms)
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

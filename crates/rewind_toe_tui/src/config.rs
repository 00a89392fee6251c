//! Frontend settings loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use rewind_toe::MoveOrder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "rewind_toe.toml";

/// User-configurable settings for the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct Settings {
    /// Order of the move list when a session starts.
    initial_order: MoveOrder,

    /// File that receives log output.
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is unset (e.g. `info`, `rewind_toe=debug`).
    log_filter: String,

    /// Show 1-9 in empty cells.
    show_cell_numbers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            initial_order: MoveOrder::Ascending,
            log_file: PathBuf::from("rewind_toe.log"),
            log_filter: "info".to_string(),
            show_cell_numbers: true,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(order = ?settings.initial_order, "Settings loaded");
        Ok(settings)
    }

    /// Resolves settings for a session.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Settings error with location tracking.
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = toml::from_str("initial_order = \"descending\"").unwrap();
        assert_eq!(*settings.initial_order(), MoveOrder::Descending);
        assert_eq!(settings.log_filter(), "info");
        assert!(*settings.show_cell_numbers());
    }

    #[test]
    fn test_unknown_order_is_rejected() {
        assert!(toml::from_str::<Settings>("initial_order = \"sideways\"").is_err());
    }

    #[test]
    fn test_setters_override() {
        let settings = Settings::default()
            .with_initial_order(MoveOrder::Descending)
            .with_log_file(PathBuf::from("other.log"));
        assert_eq!(*settings.initial_order(), MoveOrder::Descending);
        assert_eq!(settings.log_file(), &PathBuf::from("other.log"));
    }
}

//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the tracker application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::logging::LoggingConfig;
use crate::persistence::{default_data_dir, find_config_file, read_config_file, write_config_file};

/// Environment variable that overrides [`Config::data_dir`].
pub const DATA_DIR_ENV: &str = "TRACKER_DATA_DIR";

/// The main configuration struct for the tracker application.
///
/// Every field is optional in the file; a missing file yields the defaults.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use tracker_config::{Config, LoggingConfig};
///
/// let config = Config::default();
/// assert!(config.data_dir.is_none());
///
/// let config = Config {
///     data_dir: Some(PathBuf::from("/tmp/tracker")),
///     export_dir: None,
///     logging: LoggingConfig::default(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the persisted card collection.
    ///
    /// Defaults to the platform data directory (`~/.local/share/tracker`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Directory export files are written to. Defaults to the working
    /// directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Log file configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new empty configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations and applies
    /// environment overrides.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./tracker.json5` or `./tracker.json`
    /// 2. User: `~/.config/tracker/config.json5` or `~/.config/tracker/config.json`
    ///
    /// If no configuration file is found, the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tracker_config::Config;
    ///
    /// # fn example() -> tracker_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Data lives in {}", config.resolved_data_dir()?.display());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        Self::load_found(find_config_file(), |key| std::env::var(key).ok())
    }

    /// Loads the discovered file, or the defaults when there is none.
    fn load_found<F>(found: Option<PathBuf>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match found {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        let config = config.with_env_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment overrides are applied here too, so `--config` and the
    /// default search behave the same.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        let config = config.with_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Applies environment overrides, reading variables through `lookup`.
    ///
    /// Only [`DATA_DIR_ENV`] is recognised. Empty values are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use tracker_config::Config;
    ///
    /// let config = Config::default()
    ///     .with_env_overrides(|key| (key == "TRACKER_DATA_DIR").then(|| "/srv/cards".to_string()));
    /// assert_eq!(config.data_dir, Some(PathBuf::from("/srv/cards")));
    /// ```
    #[must_use]
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            self.data_dir = Some(PathBuf::from(dir));
        }
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured path is empty or the log level is
    /// unknown.
    pub fn validate(&self) -> Result<()> {
        for (field, path) in [("data_dir", &self.data_dir), ("export_dir", &self.export_dir)] {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(ConfigError::InvalidPath {
                    field,
                    reason: "path is empty".to_string(),
                });
            }
        }
        self.logging.validate()
    }

    /// Returns the directory holding card data.
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is configured and the platform data
    /// directory cannot be determined.
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }

    /// Returns the directory export files are written to.
    #[must_use]
    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Returns the directory log files are written to.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory is needed and cannot be
    /// determined.
    pub fn resolved_log_dir(&self) -> Result<PathBuf> {
        match &self.logging.directory {
            Some(dir) => Ok(dir.clone()),
            None => Ok(self.logging.directory_or(&self.resolved_data_dir()?)),
        }
    }
}

//! Log output configuration.
//!
//! The TUI owns the terminal, so log lines go to a daily-rotated file
//! instead of stderr. This module only describes where and how verbosely;
//! the binary installs the subscriber.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Level used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Levels accepted by [`LoggingConfig::validate`].
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Prefix of the rotated log files (`tracker.log.YYYY-MM-DD`).
pub const LOG_FILE_PREFIX: &str = "tracker.log";

/// Configuration for file logging.
///
/// # Examples
///
/// ```
/// use tracker_config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// assert!(config.enabled);
/// assert_eq!(config.level, "info");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether log files are written at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Default filter level. `RUST_LOG` takes precedence when set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for log files. Defaults to `<data dir>/logs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

fn default_enabled() -> bool {
    true
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: default_level(),
            directory: None,
        }
    }
}

impl LoggingConfig {
    /// Returns the log directory, falling back to `logs/` under `data_dir`.
    #[must_use]
    pub fn directory_or(&self, data_dir: &Path) -> PathBuf {
        self.directory
            .clone()
            .unwrap_or_else(|| data_dir.join("logs"))
    }

    /// Validates the logging configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the level is unknown or the directory is empty.
    pub fn validate(&self) -> Result<()> {
        let level = self.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.level.clone()));
        }
        if self
            .directory
            .as_ref()
            .is_some_and(|d| d.as_os_str().is_empty())
        {
            return Err(ConfigError::InvalidPath {
                field: "logging.directory",
                reason: "path is empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(LoggingConfig::default().validate().is_ok());
    }

    #[test]
    fn level_is_case_insensitive() {
        let config = LoggingConfig {
            level: "DEBUG".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_level_is_rejected() {
        let config = LoggingConfig {
            level: "verbose".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLogLevel(level)) if level == "verbose"
        ));
    }

    #[test]
    fn empty_directory_is_rejected() {
        let config = LoggingConfig {
            directory: Some(PathBuf::new()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn directory_falls_back_to_data_dir() {
        let config = LoggingConfig::default();
        assert_eq!(
            config.directory_or(Path::new("/data")),
            PathBuf::from("/data/logs")
        );

        let config = LoggingConfig {
            directory: Some(PathBuf::from("/var/log/tracker")),
            ..Default::default()
        };
        assert_eq!(
            config.directory_or(Path::new("/data")),
            PathBuf::from("/var/log/tracker")
        );
    }

    #[test]
    fn deserialize_partial() {
        let config: LoggingConfig = serde_json::from_str(r#"{"level": "warn"}"#).unwrap();
        assert!(config.enabled);
        assert_eq!(config.level, "warn");
        assert!(config.directory.is_none());
    }
}

//! Configuration management for the tracker application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files, environment variables, and defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`logging`]: Log file configuration
//! - [`persistence`]: Config file reading and writing, default directories
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variables (`TRACKER_DATA_DIR`)
//! 2. Local config (`./tracker.json5` or `./tracker.json`)
//! 3. User config (`~/.config/tracker/config.json5` or `~/.config/tracker/config.json`)
//! 4. Built-in defaults
//!
//! # Example File
//!
//! ```json5
//! {
//!   // Card data; defaults to ~/.local/share/tracker
//!   data_dir: "~/cards",
//!   export_dir: "~/Downloads",
//!   logging: { level: "debug" },
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::{Config, DATA_DIR_ENV};
pub use error::{ConfigError, Result};
pub use logging::{LOG_FILE_PREFIX, LoggingConfig};

//! File logging.
//!
//! The terminal belongs to the board, so log output only ever goes to a
//! daily rolling file. `RUST_LOG` takes precedence over the configured level.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tracker_config::{LOG_FILE_PREFIX, LoggingConfig};

/// Installs the global subscriber writing to `directory`.
///
/// Returns `None` when logging is disabled or the directory cannot be
/// created; the application then runs without logs. The returned guard must
/// stay alive for buffered lines to be flushed.
pub fn init(config: &LoggingConfig, directory: &Path) -> Option<WorkerGuard> {
    if !config.enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(directory) {
        eprintln!(
            "Warning: could not create log directory {}: {e}",
            directory.display()
        );
        return None;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_ascii_lowercase()));

    let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}

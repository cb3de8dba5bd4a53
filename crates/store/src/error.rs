//! Error types for storage operations.

use std::path::PathBuf;

/// Errors that can occur while reading or writing persisted data.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A file could not be read, written, or created.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The card collection could not be serialized.
    #[error("failed to serialize cards: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The platform data directory could not be determined.
    #[error("could not determine data directory")]
    NoDataDirectory,
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// A specialized Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

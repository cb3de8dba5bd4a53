//! Error types for the tracker-protocol crate.
//!
//! This module defines the errors raised when building cards and when reading
//! or writing card documents.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A card title was empty after trimming.
    #[error("invalid card title: title cannot be empty")]
    EmptyTitle,

    /// A status string did not name one of the board columns.
    #[error("unknown status: {0:?}")]
    UnknownStatus(String),

    /// Failed to serialize cards to JSON.
    #[error("failed to serialize to JSON: {0}")]
    SerializationFailed(#[source] serde_json::Error),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ProtocolError::EmptyTitle;
        assert_eq!(err.to_string(), "invalid card title: title cannot be empty");

        let err = ProtocolError::UnknownStatus("archived".to_string());
        assert_eq!(err.to_string(), r#"unknown status: "archived""#);
    }
}

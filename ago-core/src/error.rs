//! Error types for ago

use thiserror::Error;

/// Core error type for ago operations
#[derive(Error, Debug)]
pub enum AgoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading, parsing or writing the persisted alias file failed
    #[error("Alias store error: {0}")]
    Store(String),

    /// Missing or malformed arguments to an alias command
    #[error("{0}")]
    Usage(String),

    /// Alias name rejected at definition time
    #[error("Invalid alias: {0}")]
    InvalidAlias(String),

    /// The wrapped tool could not be started at all
    #[error("Failed to start '{tool}': {reason}")]
    Spawn { tool: String, reason: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for ago operations
pub type Result<T> = std::result::Result<T, AgoError>;

impl From<serde_json::Error> for AgoError {
    fn from(err: serde_json::Error) -> Self {
        AgoError::Serialization(err.to_string())
    }
}

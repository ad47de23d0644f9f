//! Error types for memo-keeper.

use thiserror::Error;

/// Result type alias using memo-keeper's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for memo-keeper operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// The store refused a write (duplicate key, constraint, stale record)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Inference/generation failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The message carried by the error, without the category prefix.
    ///
    /// This is what gets surfaced to users in import reports, where the
    /// category is implied by context.
    pub fn detail(&self) -> String {
        match self {
            Error::Database(e) => e.to_string(),
            Error::Io(e) => e.to_string(),
            Error::NotFound(msg)
            | Error::Conflict(msg)
            | Error::Inference(msg)
            | Error::Serialization(msg)
            | Error::Config(msg)
            | Error::InvalidInput(msg)
            | Error::Request(msg)
            | Error::Internal(msg) => msg.clone(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}

//! Error types for the Bingo SDK
//!
//! Submission failures are reported as [`crate::ApiResult::Error`] values and
//! validation failures as plain strings. This type covers everything else:
//! misconfiguration, transport plumbing and lifecycle misuse.

use thiserror::Error;

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the Bingo SDK
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failures (connect, timeout, body read)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The transport was closed by `cleanup()`
    #[error("HTTP transport is closed")]
    TransportClosed,

    /// HTTP client construction or request building errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A one-time registration was attempted twice
    #[error("Already initialized: {0}")]
    AlreadyInitialized(String),

    /// Async runtime errors (dispatcher construction)
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create an "already initialized" error
    pub fn already_initialized(what: impl Into<String>) -> Self {
        Self::AlreadyInitialized(what.into())
    }

    /// Create a runtime error
    pub fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}

//! Application error types

use relstamp_domain::DomainError;
use thiserror::Error;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    /// A version could not be parsed or narrowed.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// A packed version argument is not a `u32`.
    #[error("invalid packed version: {0}")]
    InvalidPacked(String),

    /// An environment variable holds an unusable value.
    #[error("configuration error: {0}")]
    Config(String),

    /// The log subscriber could not be installed.
    #[error("logging error: {0}")]
    Logging(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failed.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

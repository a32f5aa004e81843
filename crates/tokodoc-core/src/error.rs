//! Error types for tokodoc-core

use thiserror::Error;

/// Result type alias using tokodoc-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tokodoc-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with `ok: false` or an unusable body
    #[error("Backend error: {0}")]
    Api(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Duplicate attachment filenames within one category
    #[error("Duplicate file in category: {0}")]
    DuplicateFile(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session persistence error
    #[error("Session storage error: {0}")]
    SessionStorage(String),
}

//! Custom error types for translation and sync operations

use thiserror::Error;

/// Errors raised while translating or republishing a post
#[derive(Error, Debug)]
pub enum SyncError {
    /// Translation API returned a non-success status
    #[error("translation API error: {status} - {message}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Response body, as returned by the API
        message: String,
    },

    /// API response was missing the expected content field
    #[error("invalid response: {message}")]
    InvalidResponse {
        /// What was wrong with the response
        message: String,
    },

    /// Remote site rejected or failed the post-creation call
    #[error("publish failed: {status} - {message}")]
    Publish {
        /// HTTP status code returned by the remote site
        status: u16,
        /// Response body returned by the remote site
        message: String,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Config {
        /// What is missing or invalid
        message: String,
    },

    /// Reqwest error (network failure, timeout, malformed URL)
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Wrapper for anyhow errors
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for SyncError {
    fn from(err: anyhow::Error) -> Self {
        SyncError::Internal(err.to_string())
    }
}

/// Result type for translation and sync operations
pub type Result<T> = std::result::Result<T, SyncError>;

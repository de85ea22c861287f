//! Error types for the Jina HTTP client

use thiserror::Error;

/// Errors that can occur when talking to the Jina reader or search APIs
#[derive(Debug, Error)]
pub enum JinaError {
    /// Search was attempted without a configured API key
    #[error("JINA_API_KEY not set in environment")]
    MissingApiKey,

    /// HTTP request failed at the network level
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Search exceeded its fixed timeout
    #[error("search request timed out after 30 seconds")]
    Timeout,

    /// Search endpoint rejected the credential (401)
    #[error("invalid API key")]
    InvalidApiKey,

    /// Search endpoint refused the request (403)
    #[error("access denied")]
    AccessDenied,

    /// Response body was not the expected JSON
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Result type for Jina client operations
pub type Result<T> = std::result::Result<T, JinaError>;

//! Error types for owfin.

use thiserror::Error;

/// Result type alias for owfin operations.
pub type Result<T> = std::result::Result<T, OwfinError>;

/// Errors that can occur while fetching and normalizing quote data.
#[derive(Error, Debug)]
pub enum OwfinError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Upstream returned an error status.
    #[error("Upstream returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// Upstream returned something other than JSON.
    #[error("Expected JSON response (content-type: {content_type}, preview: {preview})")]
    ContentType {
        /// The content-type header value.
        content_type: String,
        /// The first bytes of the response body.
        preview: String,
    },

    /// No symbol in a batch produced any quote data.
    #[error("No quote data available for any requested symbol")]
    NoQuoteData,

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

//! Error types for the gitscout crate.
//!
//! All errors use stable string messages suitable for display and
//! programmatic handling. Keywords under investigation never appear in
//! error messages.

/// Errors that can occur during discovery operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// An HTTP request to the code-search API failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse an API response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration or input.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for gitscout results.
pub type Result<T> = std::result::Result<T, SearchError>;

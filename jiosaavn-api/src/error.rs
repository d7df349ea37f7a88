//! Error types for the JioSaavn API client.

use thiserror::Error;

/// Errors that can occur when interacting with the JioSaavn API.
#[derive(Debug, Error)]
pub enum SaavnError {
    /// A caller-supplied argument was rejected before any request was made
    /// (unknown response mode, page/limit out of range, missing url and id).
    #[error("invalid argument: {0}")]
    Validation(String),

    /// A URL was supplied but does not have the shape of a JioSaavn
    /// song/album/playlist page.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP transport error (connection refused, non-2xx status, body that
    /// is not valid JSON, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The resource page was fetched but none of the known id patterns
    /// matched. Usually means the site layout changed.
    #[error("could not extract {0} id from page")]
    Extraction(String),

    /// The API answered but had no entry for the requested id.
    #[error("not found: {0}")]
    NotFound(String),

    /// File I/O error (config read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse or serialize JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors (e.g. missing config directory).
    #[error("{0}")]
    Other(String),
}

/// Convenience alias for `Result<T, SaavnError>`.
pub type Result<T> = std::result::Result<T, SaavnError>;

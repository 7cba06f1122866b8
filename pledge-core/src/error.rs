//! Error types for PLEDGE operations

use thiserror::Error;

/// Failure to obtain a dataset from its source.
///
/// Loading is all-or-nothing: any of these ends the session before a
/// dashboard is built.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("Failed to read dataset from {location}: {reason}")]
    Io { location: String, reason: String },

    #[error("Request to {url} failed: {reason}")]
    Http { url: String, reason: String },

    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Malformed dataset: {reason}")]
    Malformed { reason: String },
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Malformed {
            reason: err.to_string(),
        }
    }
}

/// Result type for dataset loading.
pub type LoadResult<T> = Result<T, LoadError>;

// Error types for ghcache.
// Handles GitHub API errors, transport faults, and terminal I/O errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhCacheError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{endpoint} returned {status}: {message}")]
    Remote {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("Invalid GITHUB_TOKEN value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GhCacheError {
    /// HTTP status of a remote error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            GhCacheError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GhCacheError>;

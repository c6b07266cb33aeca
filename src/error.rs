//! Error handling for ytresolve

use thiserror::Error;

/// Main error type for ytresolve
#[derive(Debug, Error)]
pub enum YtResolveError {
    #[error("Unknown quality group: {0}")]
    UnknownQualityGroup(String),

    #[error("Invalid itag for this category: {0}")]
    InvalidItag(String),

    #[error("YouTube API error: {0}")]
    PlatformApi(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

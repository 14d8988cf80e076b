// Error types for folio.
// Covers GitHub API failures, cache storage errors, and layout/config validation.

use reqwest::StatusCode;
use thiserror::Error;

/// Message shown in place of GitHub data whenever a load fails.
pub const LOAD_FAILED_MESSAGE: &str = "Unable to load GitHub data right now.";

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: StatusCode, url: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded, resets at {reset_at}")]
    RateLimited { reset_at: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Unknown page anchor: {0}")]
    UnknownAnchor(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = FolioError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            url: "https://api.github.com/users/octocat".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 500 Internal Server Error from https://api.github.com/users/octocat"
        );

        let err = FolioError::UnknownAnchor("gh=shoe-size".to_string());
        assert_eq!(err.to_string(), "Unknown page anchor: gh=shoe-size");
    }
}

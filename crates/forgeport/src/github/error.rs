//! Error types for GitHub API operations.

use thiserror::Error;

use crate::http::HttpError;

/// Errors that can occur when interacting with the GitHub API.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Token was rejected (400 or 401).
    #[error("Authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    /// A resource the operation depends on does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// API returned a non-retryable error response.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// API returned a retryable response (403, 429, or 5xx) and all
    /// attempts were exhausted.
    #[error("API error after retries ({status}): {message}")]
    Retryable { status: u16, message: String },
}

/// Check whether an error should trigger another attempt.
pub fn is_retryable(err: &GitHubError) -> bool {
    matches!(err, GitHubError::Retryable { .. })
}

/// Get a short error message suitable for display.
pub fn short_error_message(err: &GitHubError) -> String {
    match err {
        GitHubError::Http(_) => "Network error".to_string(),
        GitHubError::Json(_) => "JSON parse error".to_string(),
        GitHubError::Auth { status, .. } => format!("Authentication failed (HTTP {})", status),
        GitHubError::NotFound(resource) => format!("Not found: {}", resource),
        GitHubError::Api { status, message } | GitHubError::Retryable { status, message } => {
            if message.chars().count() > 50 {
                let truncated: String = message.chars().take(47).collect();
                format!("HTTP {}: {}...", status, truncated)
            } else {
                format!("HTTP {}: {}", status, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_retryable_variant_is_retryable() {
        assert!(is_retryable(&GitHubError::Retryable {
            status: 502,
            message: "bad gateway".to_string(),
        }));
        assert!(!is_retryable(&GitHubError::NotFound("repo: api".to_string())));
        assert!(!is_retryable(&GitHubError::Api {
            status: 422,
            message: "validation failed".to_string(),
        }));
    }

    #[test]
    fn short_messages_stay_compact() {
        let err = GitHubError::Auth {
            status: 401,
            message: "Bad credentials".to_string(),
        };
        assert_eq!(short_error_message(&err), "Authentication failed (HTTP 401)");
    }
}

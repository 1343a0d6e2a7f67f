//! Error types for Bitbucket Cloud API operations.

use thiserror::Error;

use crate::http::HttpError;

/// Errors that can occur when interacting with the Bitbucket Cloud API.
///
/// Transport and JSON failures are never retried; only [`BitbucketError::Retryable`]
/// indicates a rate limit or server-side failure worth another attempt.
#[derive(Debug, Error)]
pub enum BitbucketError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Credentials were rejected (400 or 401).
    #[error("Authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    /// API returned a non-retryable error response.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// API returned a retryable response (403, 429, or 5xx) and all
    /// attempts were exhausted.
    #[error("API error after retries ({status}): {message}")]
    Retryable { status: u16, message: String },
}

/// Check whether an error should trigger another attempt.
pub fn is_retryable(err: &BitbucketError) -> bool {
    matches!(err, BitbucketError::Retryable { .. })
}

/// Get a short error message suitable for display.
pub fn short_error_message(err: &BitbucketError) -> String {
    match err {
        BitbucketError::Http(_) => "Network error".to_string(),
        BitbucketError::Json(_) => "JSON parse error".to_string(),
        BitbucketError::Auth { status, .. } => format!("Authentication failed (HTTP {})", status),
        BitbucketError::Api { status, message }
        | BitbucketError::Retryable { status, message } => {
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
        assert!(is_retryable(&BitbucketError::Retryable {
            status: 429,
            message: "slow down".to_string(),
        }));
        assert!(!is_retryable(&BitbucketError::Api {
            status: 409,
            message: "conflict".to_string(),
        }));
        assert!(!is_retryable(&BitbucketError::Auth {
            status: 401,
            message: "bad credentials".to_string(),
        }));
        assert!(!is_retryable(&BitbucketError::Http(HttpError::Transport(
            "connection reset".to_string()
        ))));
    }

    #[test]
    fn short_message_truncates_long_bodies() {
        let err = BitbucketError::Api {
            status: 500,
            message: "x".repeat(100),
        };
        let msg = short_error_message(&err);
        assert!(msg.starts_with("HTTP 500: "));
        assert!(msg.ends_with("..."));

        let err = BitbucketError::Api {
            status: 500,
            message: "short".to_string(),
        };
        assert_eq!(short_error_message(&err), "HTTP 500: short");
    }
}

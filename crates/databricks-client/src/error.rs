//! Error types for the Databricks transport client.

use serde::Deserialize;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Structured error returned by the Databricks REST API.
///
/// Carries the remote error code and message alongside the HTTP status that
/// produced them. Status codes of 500 and above are considered temporary and
/// drive the transport's retry decision.
#[derive(Debug, Clone)]
pub struct ProviderError {
    /// Remote error code (e.g. `RESOURCE_DOES_NOT_EXIST`). Empty when the
    /// response body could not be interpreted.
    pub error_code: String,
    /// Human-readable message from the API.
    pub message: String,
    /// HTTP status of the originating response.
    pub status_code: u16,
}

impl ProviderError {
    /// Whether a retry of the same request is expected to succeed.
    #[must_use]
    pub fn is_temporary(&self) -> bool {
        self.status_code >= 500
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.error_code.is_empty() {
            write!(f, "HTTP {}: {}", self.status_code, self.message)
        } else {
            write!(
                f,
                "{} (HTTP {}): {}",
                self.error_code, self.status_code, self.message
            )
        }
    }
}

/// Errors produced by the transport client and the resource endpoints.
///
/// Call sites match exhaustively: only `Transport` and temporary `Provider`
/// errors are ever retried, everything else surfaces immediately.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or incomplete client configuration. Surfaced at construction
    /// time, never retried.
    #[error("configuration error: {0}")]
    Config(String),

    /// A required identifier or argument was missing at the endpoint layer.
    #[error("validation error: {0}")]
    Validation(String),

    /// Network-level failure (DNS, connection refused, timeout). Retried up
    /// to the configured limit.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx/204 response from the API. Retried only when temporary.
    #[error("Databricks API error: {0}")]
    Provider(ProviderError),

    /// Malformed request or response payload. Never retried.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether the transport should retry after this error.
    #[must_use]
    pub fn is_temporary(&self) -> bool {
        match self {
            Error::Transport(_) => true,
            Error::Provider(e) => e.is_temporary(),
            Error::Config(_) | Error::Validation(_) | Error::Serialization(_) => false,
        }
    }
}

/// Error envelope carried in JSON error bodies from the API.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error_code: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_temporary_at_500_and_above() {
        let server = ProviderError {
            error_code: "INTERNAL_ERROR".to_string(),
            message: "boom".to_string(),
            status_code: 500,
        };
        assert!(server.is_temporary());

        let unavailable = ProviderError {
            error_code: String::new(),
            message: "unavailable".to_string(),
            status_code: 503,
        };
        assert!(unavailable.is_temporary());

        let not_found = ProviderError {
            error_code: "RESOURCE_DOES_NOT_EXIST".to_string(),
            message: "no such user".to_string(),
            status_code: 404,
        };
        assert!(!not_found.is_temporary());
    }

    #[test]
    fn classification_drives_retry() {
        assert!(!Error::Config("missing domain".to_string()).is_temporary());
        assert!(!Error::Validation("no user id provided".to_string()).is_temporary());
        assert!(!Error::Provider(ProviderError {
            error_code: "INVALID_REQUEST".to_string(),
            message: "bad".to_string(),
            status_code: 400,
        })
        .is_temporary());
        assert!(Error::Provider(ProviderError {
            error_code: String::new(),
            message: "gateway".to_string(),
            status_code: 502,
        })
        .is_temporary());
    }

    #[test]
    fn provider_error_display_includes_code_and_status() {
        let err = ProviderError {
            error_code: "QUOTA_EXCEEDED".to_string(),
            message: "too many users".to_string(),
            status_code: 429,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("QUOTA_EXCEEDED"));
        assert!(rendered.contains("429"));
        assert!(rendered.contains("too many users"));
    }

    #[test]
    fn error_response_tolerates_missing_fields() {
        let parsed: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.error_code.is_empty());
        assert!(parsed.message.is_empty());
    }
}

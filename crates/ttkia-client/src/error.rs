//! Client error types.

use std::path::PathBuf;

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument failed local validation; no request was sent.
    #[error("validation error: {0}")]
    Validation(String),

    /// The server rejected the bearer token (401/403).
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The referenced resource does not exist (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Server returned any other non-2xx response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message extracted from the response body.
        message: String,
    },

    /// Connection, timeout, or other transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// A local file could not be read for upload.
    #[error("failed to read file '{}': {source}", path.display())]
    File {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// URL parsing failed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is a transport-level failure.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network(_))
    }

    /// Check if this is a local validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a server error (5xx).
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Network(format!("request timed out: {}", err))
        } else if err.is_connect() {
            Error::Network(format!("connection failed: {}", err))
        } else {
            Error::Network(err.to_string())
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error body returned by the server.
///
/// The service reports failures either as `{"detail": ...}` or
/// `{"message": ...}` depending on the endpoint.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Best-effort message extraction, falling back to the raw body.
    pub(crate) fn into_message(self, raw: &str, status: u16) -> String {
        self.detail
            .or(self.message)
            .unwrap_or_else(|| {
                if raw.trim().is_empty() {
                    format!("HTTP {}", status)
                } else {
                    raw.to_string()
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(Error::Auth("bad token".into()).is_auth_error());
        assert!(Error::NotFound("conversation".into()).is_not_found());
        assert!(Error::Network("refused".into()).is_network());
        assert!(Error::Validation("empty".into()).is_validation());
        assert!(
            Error::Api {
                status: 503,
                message: "unavailable".into()
            }
            .is_server_error()
        );
        assert!(
            !Error::Api {
                status: 429,
                message: "slow down".into()
            }
            .is_server_error()
        );
    }

    #[test]
    fn test_error_body_message_extraction() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "token expired"}"#).unwrap();
        assert_eq!(body.into_message("{}", 401), "token expired");

        let body: ErrorBody = serde_json::from_str(r#"{"message": "no such conversation"}"#).unwrap();
        assert_eq!(body.into_message("{}", 404), "no such conversation");

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_message("", 502), "HTTP 502");

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.into_message("upstream exploded", 500), "upstream exploded");
    }

    #[test]
    fn test_display_formats() {
        let err = Error::Api {
            status: 429,
            message: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "API error (429): rate limited");

        let err = Error::File {
            path: PathBuf::from("/tmp/missing.pdf"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/tmp/missing.pdf"));
    }
}

//! Error types for the Reachy Mini client.

use thiserror::Error;

/// Errors that can occur when talking to a Reachy Mini daemon.
#[derive(Error, Debug)]
pub enum ReachyMiniError {
    /// The daemon answered with a non-2xx status.
    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    /// The daemon could not be reached (connection refused, DNS, timeout).
    #[error("Failed to connect to Reachy Mini at {url}: {source}")]
    Unavailable {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A 2xx response body could not be parsed into the expected type.
    #[error("Empty or unparseable response from {path}: {reason}")]
    EmptyResponse { path: String, reason: String },

    /// The caller cancelled the request.
    #[error("Request cancelled")]
    Cancelled,

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Request rejected before being sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ReachyMiniError {
    /// HTTP status code of an [`ReachyMiniError::Api`] error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of an [`ReachyMiniError::Api`] error.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Result type for Reachy Mini client operations.
pub type Result<T> = std::result::Result<T, ReachyMiniError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_accessors() {
        let err = ReachyMiniError::Api {
            status: 404,
            body: "Resource not found".to_string(),
        };

        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.response_body(), Some("Resource not found"));
        assert!(!err.is_unavailable());
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_non_api_errors_have_no_status() {
        let err = ReachyMiniError::Cancelled;
        assert_eq!(err.status_code(), None);
        assert_eq!(err.response_body(), None);
        assert!(err.is_cancelled());
    }
}

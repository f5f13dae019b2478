//! Error handling for the hostel API client
//!
//! This module defines the single error type surfaced by every client call
//! and provides a unified error handling strategy.

use std::collections::HashMap;
use thiserror::Error;

/// Per-field validation messages returned by the API on 422 responses.
///
/// The wire field is named `errors`; the client exposes it as `validation`.
pub type ValidationErrors = HashMap<String, Vec<String>>;

/// Main error type for hostel API client operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure: DNS, connect, timeout, TLS. The request
    /// never produced an HTTP status.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Api {
        status: u16,
        message: String,
        validation: Option<ValidationErrors>,
    },

    /// A 2xx response whose body could not be deserialized into the
    /// expected type.
    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(String),

    /// An authenticated endpoint was called while the token store was empty.
    #[error("not authenticated: no bearer token in store")]
    MissingToken,

    #[error("configuration error: {0}")]
    Config(String),

    /// The call was rejected locally before any request was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for hostel API client operations
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// HTTP status code, when the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Per-field validation messages, when the server returned any.
    pub fn validation(&self) -> Option<&ValidationErrors> {
        match self {
            ApiError::Api { validation, .. } => validation.as_ref(),
            _ => None,
        }
    }

    /// Messages for a single field, e.g. `err.field_errors("email")`.
    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.validation()
            .and_then(|v| v.get(field))
            .map(|msgs| msgs.as_slice())
    }

    /// True for 401 responses and for calls rejected locally for lack of
    /// a token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::MissingToken) || self.status() == Some(401)
    }

    /// True when the server rejected the payload with field-level messages.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ApiError::Api {
                validation: Some(_),
                ..
            }
        )
    }

    /// Check if the error is recoverable by retrying the same call later
    pub fn is_recoverable(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Api { status, .. } => *status >= 500 || *status == 429,
            ApiError::UnexpectedResponse(_) => false,
            ApiError::MissingToken => false,
            ApiError::Config(_) => false,
            ApiError::InvalidInput(_) => false,
            ApiError::Serialization(_) => false,
            ApiError::Io(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error_with_validation() -> ApiError {
        let mut validation = ValidationErrors::new();
        validation.insert("email".to_string(), vec!["taken".to_string()]);
        ApiError::Api {
            status: 422,
            message: "The given data was invalid.".to_string(),
            validation: Some(validation),
        }
    }

    #[test]
    fn test_status_and_validation_accessors() {
        let err = api_error_with_validation();
        assert_eq!(err.status(), Some(422));
        assert!(err.is_validation());
        assert_eq!(err.field_errors("email").unwrap()[0], "taken");
        assert!(err.field_errors("name").is_none());
    }

    #[test]
    fn test_unauthorized_detection() {
        let err = ApiError::Api {
            status: 401,
            message: "Unauthenticated.".to_string(),
            validation: None,
        };
        assert!(err.is_unauthorized());
        assert!(ApiError::MissingToken.is_unauthorized());
    }

    #[test]
    fn test_recoverability() {
        let server_error = ApiError::Api {
            status: 503,
            message: "HTTP 503".to_string(),
            validation: None,
        };
        assert!(server_error.is_recoverable());
        assert!(!api_error_with_validation().is_recoverable());
        assert!(!ApiError::MissingToken.is_recoverable());
    }
}

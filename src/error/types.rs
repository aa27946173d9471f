//! Core error type.

use thiserror::Error;

/// Errors returned by every adapter operation.
///
/// Local validation failures and remote failures are distinct variants, so callers
/// can branch on the variant instead of parsing message text. The `Display` output
/// of [`MessengerError::Validation`] is the plain human-readable message
/// (e.g. `label_id required`).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MessengerError {
    /// A required argument was missing or empty. Raised before any transport call.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Invalid client configuration (token, base URL, headers, proxy).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// No page access token is available.
    #[error("Missing access token: {0}")]
    MissingAccessToken(String),

    /// Network or HTTP client failure.
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// The Graph API answered with an error envelope that was not classified further.
    #[error("API error {status}: {message}")]
    ApiError {
        status: u16,
        code: Option<i64>,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Invalid or expired token, or missing permission.
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// Application or page level throttling.
    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    /// The referenced object does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The response body could not be interpreted.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl MessengerError {
    /// Build a validation error for `field` with the given message.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Whether this is a local validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// The offending field of a validation failure.
    pub fn validation_field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Whether the failure originated on the remote side or in the network.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::HttpError(_)
                | Self::ApiError { .. }
                | Self::AuthenticationError(_)
                | Self::RateLimitError(_)
                | Self::NotFound(_)
        )
    }

    /// Whether retrying the same request later may succeed.
    ///
    /// This crate never retries on its own; the hint is for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimitError(_) | Self::HttpError(_) => true,
            Self::ApiError { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// HTTP status code for remote API errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Graph API error code (`error.code`) for unclassified remote errors.
    pub fn graph_error_code(&self) -> Option<i64> {
        match self {
            Self::ApiError { code, .. } => *code,
            _ => None,
        }
    }
}

//! Type Conversions for MessengerError
//!
//! This module contains From trait implementations for converting
//! common error types into MessengerError.

use super::types::MessengerError;

impl From<reqwest::Error> for MessengerError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for MessengerError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: MessengerError = json_err.into();
        assert!(matches!(err, MessengerError::JsonError(_)));
    }
}

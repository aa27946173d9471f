//! Error Handling Module
//!
//! This module provides error handling for the crate, including:
//! - The core error type (`MessengerError`)
//! - Classification of Graph API error envelopes
//! - Type conversions from common error types
//!
//! # Example
//!
//! ```rust,ignore
//! use messenger_graph::error::MessengerError;
//!
//! let error = MessengerError::validation("label_id", "label_id required");
//! assert!(error.is_validation());
//! assert_eq!(error.to_string(), "label_id required");
//! ```

pub mod classify;
mod conversions;
pub mod types;

pub use classify::classify_graph_http_error;
pub use types::*;

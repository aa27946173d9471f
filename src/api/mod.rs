//! Messenger Platform endpoint adapters.
//!
//! Each adapter owns a [`SharedTransport`](crate::execution::http::SharedTransport),
//! validates arguments before touching it, and returns the raw decoded response.
//!
//! - [`broadcast`] - broadcast messages and reach estimations
//! - [`custom_labels`] - custom labels and PSID associations
//! - [`sponsored_message`] - sponsored message ads
//! - [`messenger_profile`] - Messenger Profile properties
//! - [`personas`] - personas

pub mod broadcast;
pub mod custom_labels;
pub mod messenger_profile;
pub mod personas;
pub mod sponsored_message;

pub use broadcast::{Broadcast, BroadcastRequest};
pub use custom_labels::CustomLabels;
pub use messenger_profile::{DEFAULT_PROFILE_FIELDS, MessengerProfile, ProfileCall};
pub use personas::Personas;
pub use sponsored_message::SponsoredMessage;

use crate::error::MessengerError;
use crate::types::GraphId;

/// Reject with a validation error unless `id` is present.
pub(crate) fn require_id(
    id: &GraphId,
    field: &'static str,
    message: &str,
) -> Result<(), MessengerError> {
    if id.is_empty() {
        return Err(reject(field, message));
    }
    Ok(())
}

/// Reject with a validation error unless `value` is non-blank.
pub(crate) fn require_str(
    value: &str,
    field: &'static str,
    message: &str,
) -> Result<(), MessengerError> {
    if value.trim().is_empty() {
        return Err(reject(field, message));
    }
    Ok(())
}

pub(crate) fn reject(field: &'static str, message: &str) -> MessengerError {
    tracing::debug!(field = field, "request rejected: {message}");
    MessengerError::validation(field, message)
}

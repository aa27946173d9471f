//! Sponsored Messages API.
//!
//! `POST /act_{ad_account_id}/sponsored_message_ads` (Graph `v2.11`), form-encoded,
//! with the page access token inside the form.

use serde_json::Value;

use crate::defaults::graph::{ACCESS_TOKEN_PARAM, BROADCAST_API_VERSION};
use crate::error::MessengerError;
use crate::execution::http::SharedTransport;
use crate::types::{GraphId, GraphRequest, SponsoredMessageOptions};

use super::{reject, require_id};

/// Sponsored Messages API adapter.
#[derive(Clone)]
pub struct SponsoredMessage {
    transport: SharedTransport,
}

impl SponsoredMessage {
    pub fn new(transport: SharedTransport) -> Self {
        Self { transport }
    }

    /// Send a sponsored message ad.
    ///
    /// Every required option field and the ad account id are checked before the
    /// token is read or anything is sent. Returns e.g.
    /// `{"ad_group_id": "...", "broadcast_id": "...", "success": true}`.
    pub async fn send_sponsored_message(
        &self,
        ad_account_id: impl Into<GraphId>,
        options: SponsoredMessageOptions,
    ) -> Result<Value, MessengerError> {
        if let Some(field) = options.missing_fields().first().copied() {
            return Err(reject(field, &format!("Valid {field} property required")));
        }

        let ad_account_id = ad_account_id.into();
        require_id(&ad_account_id, "ad_account_id", "ad_account_id required")?;

        let mut form = options.to_form();
        form.insert(ACCESS_TOKEN_PARAM.to_string(), self.transport.access_token()?);

        let request = GraphRequest::post(format!(
            "/act_{}/sponsored_message_ads",
            ad_account_id.path_segment()
        ))
        .with_api_version(BROADCAST_API_VERSION)
        .with_form(form);

        self.transport.send_request(request).await
    }
}

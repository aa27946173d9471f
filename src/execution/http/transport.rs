//! Transport abstraction.
//!
//! Every adapter is handed a transport at construction time and calls it once
//! per operation. The default implementation is
//! [`GraphApiTransport`](super::graph_api::GraphApiTransport); applications can
//! inject their own to route calls through a different HTTP stack, a proxy
//! service, or a test double.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::MessengerError;
use crate::types::GraphRequest;

/// Sends Graph requests and supplies the page access token.
#[async_trait]
pub trait GraphTransport: Send + Sync {
    /// Send one request and return the decoded response body.
    ///
    /// Remote failures are returned as-is; adapters do not interpret them.
    async fn send_request(&self, request: GraphRequest)
    -> Result<serde_json::Value, MessengerError>;

    /// The page access token, for endpoints that need it inside the payload.
    fn access_token(&self) -> Result<String, MessengerError>;
}

/// Transport handle shared by the adapters of one client.
pub type SharedTransport = Arc<dyn GraphTransport>;

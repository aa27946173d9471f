//! Broadcast API.
//!
//! Endpoints (all pinned to Graph `v2.11`):
//! - `POST /me/broadcast_messages`
//! - `POST /me/broadcast_reach_estimations`
//! - `GET /{reach_estimation_id}`

use serde_json::{Map, Value, json};

use crate::defaults::graph::BROADCAST_API_VERSION;
use crate::error::MessengerError;
use crate::execution::http::SharedTransport;
use crate::types::{GraphId, GraphRequest};

use super::{reject, require_id};

/// One call against the broadcast endpoints.
#[derive(Debug, Clone, PartialEq)]
pub enum BroadcastRequest {
    /// Send a message creative, optionally only to users with a custom label.
    Send {
        message_creative_id: GraphId,
        custom_label_id: Option<GraphId>,
    },
    /// Start estimating reach for all users, or for one custom label.
    StartReachEstimation { custom_label_id: Option<GraphId> },
    /// Poll a reach estimation.
    GetReachEstimation { reach_estimation_id: GraphId },
}

impl BroadcastRequest {
    /// Pick a request from loosely populated fields.
    ///
    /// The first present field wins, in this order: `message_creative_id`,
    /// `custom_label_id`, `reach_estimation_id`. Empty ids count as absent.
    pub fn from_fields(
        message_creative_id: Option<GraphId>,
        custom_label_id: Option<GraphId>,
        reach_estimation_id: Option<GraphId>,
    ) -> Option<Self> {
        let present = |id: Option<GraphId>| id.filter(|id| !id.is_empty());
        let custom_label_id = present(custom_label_id);

        if let Some(message_creative_id) = present(message_creative_id) {
            return Some(Self::Send {
                message_creative_id,
                custom_label_id,
            });
        }
        if custom_label_id.is_some() {
            return Some(Self::StartReachEstimation { custom_label_id });
        }
        present(reach_estimation_id)
            .map(|reach_estimation_id| Self::GetReachEstimation { reach_estimation_id })
    }

    fn validate(&self) -> Result<(), MessengerError> {
        match self {
            Self::Send {
                message_creative_id,
                ..
            } => require_id(
                message_creative_id,
                "message_creative_id",
                "Valid message_creative_id required",
            ),
            Self::StartReachEstimation { .. } => Ok(()),
            Self::GetReachEstimation {
                reach_estimation_id,
            } => require_id(
                reach_estimation_id,
                "reach_estimation_id",
                "Valid reach_estimation_id required",
            ),
        }
    }

    /// Build the Graph request descriptor.
    pub fn to_graph_request(&self) -> GraphRequest {
        let label = |id: &Option<GraphId>| id.as_ref().filter(|id| !id.is_empty()).cloned();

        let request = match self {
            Self::Send {
                message_creative_id,
                custom_label_id,
            } => {
                let mut payload = Map::new();
                payload.insert("message_creative_id".into(), message_creative_id.to_json());
                if let Some(label_id) = label(custom_label_id) {
                    payload.insert("custom_label_id".into(), label_id.to_json());
                }
                GraphRequest::post("/me/broadcast_messages").with_json(Value::Object(payload))
            }
            Self::StartReachEstimation { custom_label_id } => {
                let payload = match label(custom_label_id) {
                    Some(label_id) => json!({ "custom_label_id": label_id.to_json() }),
                    None => json!({}),
                };
                GraphRequest::post("/me/broadcast_reach_estimations").with_json(payload)
            }
            Self::GetReachEstimation {
                reach_estimation_id,
            } => GraphRequest::get(format!("/{}", reach_estimation_id.path_segment())),
        };

        request.with_api_version(BROADCAST_API_VERSION)
    }
}

/// Broadcast API adapter.
#[derive(Clone)]
pub struct Broadcast {
    transport: SharedTransport,
}

impl Broadcast {
    pub fn new(transport: SharedTransport) -> Self {
        Self { transport }
    }

    /// Send a broadcast of a message creative.
    ///
    /// Returns e.g. `{"broadcast_id": 397230957240952}`.
    pub async fn send_broadcast(
        &self,
        message_creative_id: impl Into<GraphId>,
        custom_label_id: Option<GraphId>,
    ) -> Result<Value, MessengerError> {
        self.call_broadcast_api(BroadcastRequest::Send {
            message_creative_id: message_creative_id.into(),
            custom_label_id,
        })
        .await
    }

    /// Start a reach estimation for all users, or for the users of a custom label.
    ///
    /// Returns e.g. `{"reach_estimation_id": "9485676932424"}`.
    pub async fn start_broadcast_reach_estimation(
        &self,
        custom_label_id: Option<GraphId>,
    ) -> Result<Value, MessengerError> {
        self.call_broadcast_api(BroadcastRequest::StartReachEstimation { custom_label_id })
            .await
    }

    /// Current status of a reach estimation started with
    /// [`start_broadcast_reach_estimation`](Self::start_broadcast_reach_estimation).
    pub async fn get_broadcast_reach_estimation(
        &self,
        reach_estimation_id: impl Into<GraphId>,
    ) -> Result<Value, MessengerError> {
        self.call_broadcast_api(BroadcastRequest::GetReachEstimation {
            reach_estimation_id: reach_estimation_id.into(),
        })
        .await
    }

    pub async fn call_broadcast_api(
        &self,
        request: BroadcastRequest,
    ) -> Result<Value, MessengerError> {
        request.validate()?;
        self.transport.send_request(request.to_graph_request()).await
    }

    /// Dispatch from loosely populated fields, see [`BroadcastRequest::from_fields`].
    pub async fn call_broadcast_api_with_fields(
        &self,
        message_creative_id: Option<GraphId>,
        custom_label_id: Option<GraphId>,
        reach_estimation_id: Option<GraphId>,
    ) -> Result<Value, MessengerError> {
        let request =
            BroadcastRequest::from_fields(message_creative_id, custom_label_id, reach_estimation_id)
                .ok_or_else(|| {
                    reject(
                        "message_creative_id",
                        "message_creative_id, custom_label_id or reach_estimation_id required",
                    )
                })?;
        self.call_broadcast_api(request).await
    }
}

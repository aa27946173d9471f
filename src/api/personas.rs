//! Personas API.

use serde_json::{Value, json};

use crate::error::MessengerError;
use crate::execution::http::SharedTransport;
use crate::types::{GraphId, GraphRequest};

use super::{require_id, require_str};

const PERSONAS_PATH: &str = "/me/personas";

/// Personas API adapter.
#[derive(Clone)]
pub struct Personas {
    transport: SharedTransport,
}

impl Personas {
    pub fn new(transport: SharedTransport) -> Self {
        Self { transport }
    }

    /// Create a persona from a display name and an avatar URL. Returns `{"id": "..."}`.
    pub async fn create_persona(
        &self,
        name: &str,
        profile_picture_url: &str,
    ) -> Result<Value, MessengerError> {
        require_str(name, "name", "A name is required to create a new persona")?;
        require_str(
            profile_picture_url,
            "profile_picture_url",
            "A profile picture is required to create a new persona",
        )?;

        let request = GraphRequest::post(PERSONAS_PATH).with_json(json!({
            "name": name,
            "profile_picture_url": profile_picture_url,
        }));
        self.transport.send_request(request).await
    }

    /// Id, name and profile picture of a persona.
    pub async fn get_persona(
        &self,
        persona_id: impl Into<GraphId>,
    ) -> Result<Value, MessengerError> {
        let persona_id = persona_id.into();
        require_id(&persona_id, "persona_id", "persona_id required")?;
        let request = GraphRequest::get(format!("/{}", persona_id.path_segment()));
        self.transport.send_request(request).await
    }

    /// All personas of the page, with `data` and `paging`.
    pub async fn get_all_personas(&self) -> Result<Value, MessengerError> {
        self.transport
            .send_request(GraphRequest::get(PERSONAS_PATH))
            .await
    }

    pub async fn delete_persona(
        &self,
        persona_id: impl Into<GraphId>,
    ) -> Result<Value, MessengerError> {
        let persona_id = persona_id.into();
        require_id(&persona_id, "persona_id", "persona_id required")?;
        let request = GraphRequest::delete(format!("/{}", persona_id.path_segment()));
        self.transport.send_request(request).await
    }
}

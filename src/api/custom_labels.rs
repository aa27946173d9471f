//! Custom Labels API.

use reqwest::Method;
use serde_json::{Value, json};

use crate::error::MessengerError;
use crate::execution::http::SharedTransport;
use crate::types::{GraphId, GraphRequest};

use super::{reject, require_id, require_str};

const LABELS_PATH: &str = "/me/custom_labels";
const LABEL_FIELDS: &str = "id,name";

/// Custom Labels API adapter.
#[derive(Clone)]
pub struct CustomLabels {
    transport: SharedTransport,
}

impl CustomLabels {
    pub fn new(transport: SharedTransport) -> Self {
        Self { transport }
    }

    /// Create a custom label. Returns `{"id": "..."}`.
    pub async fn create_custom_label(&self, name: &str) -> Result<Value, MessengerError> {
        require_str(name, "name", "name required")?;
        let request = GraphRequest::post("").with_json(json!({ "name": name }));
        self.call_custom_labels_api(request).await
    }

    /// Id and name of a custom label.
    pub async fn get_custom_label_by_id(
        &self,
        label_id: impl Into<GraphId>,
    ) -> Result<Value, MessengerError> {
        let label_id = label_id.into();
        require_id(&label_id, "label_id", "label_id required")?;
        let request = GraphRequest::get(format!("/{}", label_id.path_segment()))
            .with_query("fields", LABEL_FIELDS);
        self.call_custom_labels_api(request).await
    }

    /// Custom labels associated with a PSID.
    pub async fn get_custom_labels_by_psid(
        &self,
        psid: impl Into<GraphId>,
    ) -> Result<Value, MessengerError> {
        let psid = psid.into();
        require_id(&psid, "psid", "PSID required")?;
        let request = GraphRequest::get(format!("/{}/custom_labels", psid.path_segment()));
        self.call_custom_labels_api(request).await
    }

    /// All custom labels of the page, with `data` and `paging`.
    pub async fn get_all_custom_labels(&self) -> Result<Value, MessengerError> {
        let request = GraphRequest::get("").with_query("fields", LABEL_FIELDS);
        self.call_custom_labels_api(request).await
    }

    pub async fn delete_custom_label(
        &self,
        label_id: impl Into<GraphId>,
    ) -> Result<Value, MessengerError> {
        let label_id = label_id.into();
        require_id(&label_id, "label_id", "label_id required")?;
        let request = GraphRequest::delete(format!("/{}", label_id.path_segment()));
        self.call_custom_labels_api(request).await
    }

    /// Associate a user's PSID with a custom label.
    pub async fn add_psid_to_custom_label(
        &self,
        psid: impl Into<GraphId>,
        label_id: impl Into<GraphId>,
    ) -> Result<Value, MessengerError> {
        let request = label_association(Method::POST, psid.into(), label_id.into())?;
        self.call_custom_labels_api(request).await
    }

    /// Remove a user's PSID from a custom label.
    pub async fn remove_psid_from_custom_label(
        &self,
        psid: impl Into<GraphId>,
        label_id: impl Into<GraphId>,
    ) -> Result<Value, MessengerError> {
        let request = label_association(Method::DELETE, psid.into(), label_id.into())?;
        self.call_custom_labels_api(request).await
    }

    /// Send a labels request. An empty path targets the labels collection.
    pub async fn call_custom_labels_api(
        &self,
        mut request: GraphRequest,
    ) -> Result<Value, MessengerError> {
        if request.path.trim().is_empty() {
            request.path = LABELS_PATH.to_string();
        }
        self.transport.send_request(request).await
    }
}

fn label_association(
    method: Method,
    psid: GraphId,
    label_id: GraphId,
) -> Result<GraphRequest, MessengerError> {
    if psid.is_empty() || label_id.is_empty() {
        let field = if psid.is_empty() { "psid" } else { "label_id" };
        return Err(reject(field, "PSID and label_id required"));
    }
    Ok(
        GraphRequest::new(method, format!("/{}/label", label_id.path_segment()))
            .with_json(json!({ "user": psid.to_json() })),
    )
}

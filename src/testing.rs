//! Test doubles shared by the adapter unit tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::MessengerError;
use crate::execution::http::{GraphTransport, SharedTransport};
use crate::types::GraphRequest;

/// Records every request and answers with a canned response.
#[derive(Clone)]
pub(crate) struct RecordingTransport {
    calls: Arc<Mutex<Vec<GraphRequest>>>,
    token_reads: Arc<Mutex<usize>>,
    response: serde_json::Value,
}

impl RecordingTransport {
    pub(crate) fn new(response: serde_json::Value) -> Self {
        Self {
            calls: Arc::default(),
            token_reads: Arc::default(),
            response,
        }
    }

    pub(crate) fn shared(&self) -> SharedTransport {
        Arc::new(self.clone())
    }

    pub(crate) fn calls(&self) -> Vec<GraphRequest> {
        self.calls.lock().expect("lock").clone()
    }

    pub(crate) fn last_call(&self) -> GraphRequest {
        self.calls().pop().expect("at least one call")
    }

    pub(crate) fn token_reads(&self) -> usize {
        *self.token_reads.lock().expect("lock")
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new(serde_json::json!({"success": true}))
    }
}

#[async_trait]
impl GraphTransport for RecordingTransport {
    async fn send_request(
        &self,
        request: GraphRequest,
    ) -> Result<serde_json::Value, MessengerError> {
        self.calls.lock().expect("lock").push(request);
        Ok(self.response.clone())
    }

    fn access_token(&self) -> Result<String, MessengerError> {
        *self.token_reads.lock().expect("lock") += 1;
        Ok("token".to_string())
    }
}

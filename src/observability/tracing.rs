//! Request/response tracing for Graph API calls.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::defaults::graph::ACCESS_TOKEN_PARAM;

static MASK_SENSITIVE_VALUES: AtomicBool = AtomicBool::new(true);

pub fn set_mask_sensitive_values(mask: bool) {
    MASK_SENSITIVE_VALUES.store(mask, Ordering::Relaxed);
}

pub fn get_mask_sensitive_values() -> bool {
    MASK_SENSITIVE_VALUES.load(Ordering::Relaxed)
}

/// Shorten a credential so it can appear in logs.
pub fn mask_sensitive_value(value: &str) -> String {
    if !get_mask_sensitive_values() {
        return value.to_string();
    }
    let chars: Vec<char> = value.chars().collect();
    if chars.len() > 12 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}

fn is_sensitive_key(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    key == ACCESS_TOKEN_PARAM || key.contains("token") || key.contains("secret")
}

/// Render query/form fields for logging with credentials masked.
pub fn format_fields_for_logging(fields: &BTreeMap<String, String>) -> String {
    let masked: BTreeMap<&str, String> = fields
        .iter()
        .map(|(k, v)| {
            let value = if is_sensitive_key(k) {
                mask_sensitive_value(v)
            } else {
                v.clone()
            };
            (k.as_str(), value)
        })
        .collect();
    serde_json::to_string(&masked).unwrap_or_else(|_| format!("{masked:?}"))
}

/// Per-request tracer used by the default transport.
#[derive(Debug, Clone)]
pub struct GraphTracer {
    method: String,
    path: String,
    started: Instant,
}

impl GraphTracer {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            started: Instant::now(),
        }
    }

    /// `url` must not contain credentials.
    pub fn trace_request_start(&self, url: &str) {
        info!(method = %self.method, path = %self.path, url = %url, "Graph request started");
    }

    pub fn trace_request_details(
        &self,
        query: &BTreeMap<String, String>,
        body: Option<&crate::types::GraphBody>,
    ) {
        let body = match body {
            Some(crate::types::GraphBody::Json(v)) => v.to_string(),
            Some(crate::types::GraphBody::Form(f)) => format_fields_for_logging(f),
            None => String::new(),
        };
        debug!(
            method = %self.method,
            path = %self.path,
            query = %format_fields_for_logging(query),
            body = %body,
            "Graph request details"
        );
    }

    pub fn trace_response_success(&self, status_code: u16, response_length: usize) {
        let duration_ms = self.started.elapsed().as_millis();
        info!(
            method = %self.method,
            path = %self.path,
            status_code = status_code,
            duration_ms = duration_ms,
            response_length = response_length,
            "Graph request completed"
        );
    }

    pub fn trace_request_error(&self, status_code: Option<u16>, error_text: &str) {
        let duration_ms = self.started.elapsed().as_millis();
        warn!(
            method = %self.method,
            path = %self.path,
            status_code = ?status_code,
            error_text = %error_text,
            duration_ms = duration_ms,
            "Graph request failed"
        );
    }
}

//! Request descriptor shared by every adapter and transport.

use reqwest::Method;
use std::collections::BTreeMap;

/// Request body of a Graph call.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphBody {
    /// JSON body (`Content-Type: application/json`)
    Json(serde_json::Value),
    /// URL-encoded form body
    Form(BTreeMap<String, String>),
}

/// A single Graph API call, built fresh by an adapter and consumed by the transport.
///
/// `path` is relative to the versioned API root (e.g. `/me/personas`). When
/// `api_version` is `None` the transport uses its configured default.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphRequest {
    pub method: Method,
    pub path: String,
    pub api_version: Option<String>,
    pub query: BTreeMap<String, String>,
    pub body: Option<GraphBody>,
}

impl Default for GraphRequest {
    fn default() -> Self {
        Self {
            method: Method::GET,
            path: String::new(),
            api_version: None,
            query: BTreeMap::new(),
            body: None,
        }
    }
}

impl GraphRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_json(mut self, payload: serde_json::Value) -> Self {
        self.body = Some(GraphBody::Json(payload));
        self
    }

    pub fn with_form(mut self, form: BTreeMap<String, String>) -> Self {
        self.body = Some(GraphBody::Form(form));
        self
    }

    /// The JSON payload, if the body is JSON.
    pub fn payload(&self) -> Option<&serde_json::Value> {
        match &self.body {
            Some(GraphBody::Json(v)) => Some(v),
            _ => None,
        }
    }

    /// The form fields, if the body is form-encoded.
    pub fn form(&self) -> Option<&BTreeMap<String, String>> {
        match &self.body {
            Some(GraphBody::Form(f)) => Some(f),
            _ => None,
        }
    }
}

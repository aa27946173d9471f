//! Default transport: Graph API over `reqwest`.
//!
//! - URL: `{base_url}/{api_version}{path}`
//! - the page token travels as the `access_token` query parameter
//! - JSON bodies are sent as `application/json`, form bodies url-encoded
//! - non-2xx responses are classified from the Graph error envelope

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use crate::config::MessengerConfig;
use crate::defaults::graph::ACCESS_TOKEN_PARAM;
use crate::error::{MessengerError, classify_graph_http_error};
use crate::observability::GraphTracer;
use crate::types::{GraphBody, GraphRequest};

use super::client::build_http_client_from_config;
use super::headers::HttpHeaderBuilder;
use super::transport::GraphTransport;

#[derive(Clone)]
pub struct GraphApiTransport {
    http_client: reqwest::Client,
    base_url: String,
    api_version: String,
    page_token: SecretString,
}

impl GraphApiTransport {
    /// Validate `config` and build a transport with a client derived from its HTTP settings.
    pub fn new(config: &MessengerConfig) -> Result<Self, MessengerError> {
        config.validate()?;
        let http_client = build_http_client_from_config(&config.http_config)?;
        Ok(Self::with_http_client(config, http_client))
    }

    /// Build a transport around a caller-supplied `reqwest::Client`.
    pub fn with_http_client(config: &MessengerConfig, http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            page_token: config.page_token.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Absolute URL for `request`, without query string.
    pub fn url_for(&self, request: &GraphRequest) -> String {
        let version = request
            .api_version
            .as_deref()
            .unwrap_or(&self.api_version)
            .trim_matches('/');
        let path = request.path.trim();
        if path.starts_with('/') {
            format!("{}/{}{}", self.base_url, version, path)
        } else {
            format!("{}/{}/{}", self.base_url, version, path)
        }
    }
}

impl fmt::Debug for GraphApiTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphApiTransport")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("page_token", &"[REDACTED]")
            .finish()
    }
}

#[async_trait]
impl GraphTransport for GraphApiTransport {
    async fn send_request(
        &self,
        request: GraphRequest,
    ) -> Result<serde_json::Value, MessengerError> {
        let tracer = GraphTracer::new(request.method.as_str(), &request.path);
        let url = self.url_for(&request);

        let mut query = request.query.clone();
        if !query.contains_key(ACCESS_TOKEN_PARAM) {
            query.insert(ACCESS_TOKEN_PARAM.to_string(), self.access_token()?);
        }

        tracer.trace_request_start(&url);
        tracer.trace_request_details(&query, request.body.as_ref());

        let headers = HttpHeaderBuilder::new().with_json_accept().build();
        let mut builder = self
            .http_client
            .request(request.method.clone(), &url)
            .headers(headers)
            .query(&query);

        builder = match &request.body {
            Some(GraphBody::Json(payload)) => builder.json(payload),
            Some(GraphBody::Form(form)) => builder.form(form),
            None => builder,
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                tracer.trace_request_error(None, &e.to_string());
                return Err(e.into());
            }
        };

        let status = response.status().as_u16();
        let text = response.text().await?;

        if !(200..300).contains(&status) {
            let err = classify_graph_http_error(status, &text);
            tracer.trace_request_error(Some(status), &err.to_string());
            return Err(err);
        }

        tracer.trace_response_success(status, text.len());

        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| {
            MessengerError::ParseError(format!(
                "Invalid JSON response from {}: {e}",
                request.path
            ))
        })
    }

    fn access_token(&self) -> Result<String, MessengerError> {
        let token = self.page_token.expose_secret();
        if token.trim().is_empty() {
            return Err(MessengerError::MissingAccessToken(
                "page access token not configured".into(),
            ));
        }
        Ok(token.to_string())
    }
}

//! Client builder.
//!
//! ```rust,ignore
//! let client = MessengerClient::builder()
//!     .page_token(std::env::var("MESSENGER_PAGE_TOKEN")?)
//!     .api_version("v3.2")
//!     .timeout(Duration::from_secs(15))
//!     .build()?;
//! ```

use secrecy::SecretString;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::client::MessengerClient;
use crate::config::MessengerConfig;
use crate::error::MessengerError;
use crate::execution::http::{
    GraphApiTransport, GraphTransport, SharedTransport, build_http_client_from_config,
};
use crate::types::HttpConfig;

/// Builder for [`MessengerClient`].
///
/// A custom transport set with [`with_transport`](Self::with_transport) takes
/// precedence over every HTTP setting; a custom `reqwest::Client` takes
/// precedence over timeouts, proxy, user agent and default headers.
#[derive(Clone, Default)]
pub struct MessengerBuilder {
    config: MessengerConfig,
    http_client: Option<reqwest::Client>,
    transport: Option<SharedTransport>,
}

impl MessengerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from `MESSENGER_*` environment variables.
    pub fn from_env() -> Result<Self, MessengerError> {
        Ok(Self::new().with_config(MessengerConfig::from_env()?))
    }

    pub fn with_config(mut self, config: MessengerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the page access token
    pub fn page_token<S: Into<String>>(mut self, token: S) -> Self {
        self.config.page_token = SecretString::from(token.into());
        self
    }

    /// Default Graph API version, e.g. `v3.2`
    pub fn api_version<S: Into<String>>(mut self, version: S) -> Self {
        self.config.api_version = version.into();
        self
    }

    /// Graph API root, e.g. a mock server in tests
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn http_config(mut self, http_config: HttpConfig) -> Self {
        self.config.http_config = http_config;
        self
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.timeout = Some(timeout);
        self
    }

    /// Set connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.connect_timeout = Some(timeout);
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.http_config.user_agent = Some(user_agent.into());
        self
    }

    pub fn proxy<S: Into<String>>(mut self, proxy: S) -> Self {
        self.config.http_config.proxy = Some(proxy.into());
        self
    }

    /// Add a default header sent with every request
    pub fn header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.config
            .http_config
            .headers
            .insert(name.into(), value.into());
        self
    }

    /// Set custom HTTP client
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Route every request through a custom transport
    pub fn with_transport<T: GraphTransport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn with_shared_transport(mut self, transport: SharedTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn config(&self) -> &MessengerConfig {
        &self.config
    }

    pub fn build(self) -> Result<MessengerClient, MessengerError> {
        if let Some(transport) = self.transport {
            return Ok(MessengerClient::from_shared_transport(transport));
        }

        self.config.validate()?;
        let http_client = match self.http_client {
            Some(client) => client,
            None => build_http_client_from_config(&self.config.http_config)?,
        };
        let transport = GraphApiTransport::with_http_client(&self.config, http_client);
        tracing::debug!(
            base_url = %transport.base_url(),
            api_version = %transport.api_version(),
            "Messenger client built"
        );
        Ok(MessengerClient::with_transport(transport))
    }
}

impl fmt::Debug for MessengerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessengerBuilder")
            .field("config", &self.config)
            .field("custom_http_client", &self.http_client.is_some())
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

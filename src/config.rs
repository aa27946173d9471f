//! Client configuration.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use crate::defaults;
use crate::error::MessengerError;
use crate::types::HttpConfig;

/// Settings for the default Graph API transport.
#[derive(Clone)]
pub struct MessengerConfig {
    /// Page access token
    pub page_token: SecretString,
    /// Graph API root, without version
    pub base_url: String,
    /// Default API version (e.g. `v3.2`), used when a request does not pin one
    pub api_version: String,
    pub http_config: HttpConfig,
}

impl MessengerConfig {
    pub fn new(page_token: impl Into<String>) -> Self {
        Self {
            page_token: SecretString::from(page_token.into()),
            ..Self::default()
        }
    }

    /// Load from `MESSENGER_PAGE_TOKEN`, `MESSENGER_GRAPH_API_VERSION` and
    /// `MESSENGER_GRAPH_BASE_URL`. Only the token is required.
    pub fn from_env() -> Result<Self, MessengerError> {
        let token = std::env::var(defaults::env::PAGE_TOKEN).map_err(|_| {
            MessengerError::MissingAccessToken(format!(
                "{} environment variable not set",
                defaults::env::PAGE_TOKEN
            ))
        })?;

        let mut config = Self::new(token);
        if let Ok(version) = std::env::var(defaults::env::API_VERSION) {
            config.api_version = version;
        }
        if let Ok(base_url) = std::env::var(defaults::env::BASE_URL) {
            config.base_url = base_url;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    pub fn validate(&self) -> Result<(), MessengerError> {
        if self.page_token.expose_secret().trim().is_empty() {
            return Err(MessengerError::MissingAccessToken(
                "page access token must not be empty".into(),
            ));
        }
        if self.base_url.trim().is_empty() {
            return Err(MessengerError::ConfigurationError(
                "base_url must not be empty".into(),
            ));
        }
        if !is_api_version(&self.api_version) {
            return Err(MessengerError::ConfigurationError(format!(
                "invalid Graph API version '{}', expected e.g. 'v3.2'",
                self.api_version
            )));
        }
        Ok(())
    }
}

/// `vN` or `vN.M`
fn is_api_version(v: &str) -> bool {
    let Some(rest) = v.strip_prefix('v') else {
        return false;
    };
    let mut parts = rest.split('.');
    let major_ok = parts
        .next()
        .is_some_and(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
    let minor_ok = parts
        .next()
        .is_none_or(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()));
    major_ok && minor_ok && parts.next().is_none()
}

impl Default for MessengerConfig {
    fn default() -> Self {
        Self {
            page_token: SecretString::from(String::new()),
            base_url: defaults::graph::BASE_URL.to_string(),
            api_version: defaults::graph::API_VERSION.to_string(),
            http_config: HttpConfig::default(),
        }
    }
}

impl fmt::Debug for MessengerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessengerConfig")
            .field("page_token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("http_config", &self.http_config)
            .finish()
    }
}

//! HTTP client builder utilities

use crate::error::MessengerError;
use crate::types::HttpConfig;

use super::headers::HttpHeaderBuilder;

/// Build an HTTP client from HttpConfig
///
/// # Arguments
/// * `config` - HTTP configuration containing timeout, proxy, headers, etc.
///
/// # Returns
/// * `Ok(reqwest::Client)` - Configured HTTP client
/// * `Err(MessengerError)` - Configuration or build error
pub fn build_http_client_from_config(
    config: &HttpConfig,
) -> Result<reqwest::Client, MessengerError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| MessengerError::ConfigurationError(format!("Invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    if !config.headers.is_empty() {
        let headers = HttpHeaderBuilder::new()
            .with_custom_headers(&config.headers)?
            .build();
        builder = builder.default_headers(headers);
    }

    builder
        .build()
        .map_err(|e| MessengerError::HttpError(format!("Failed to create HTTP client: {e}")))
}

//! Default Configuration Values
//!
//! This module centralizes the default values used throughout the crate.

use std::time::Duration;

/// HTTP client default configurations
pub mod http {
    use super::*;

    /// Default request timeout for Graph API calls
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Default connection timeout for establishing HTTP connections
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Default User-Agent string for HTTP requests
    pub const USER_AGENT: &str = concat!("messenger-graph/", env!("CARGO_PKG_VERSION"));
}

/// Graph API endpoint defaults
pub mod graph {
    /// Root of the Graph API
    pub const BASE_URL: &str = "https://graph.facebook.com";

    /// API version used when a request does not pin one
    pub const API_VERSION: &str = "v3.2";

    /// Version pinned by the broadcast and sponsored message endpoints
    pub const BROADCAST_API_VERSION: &str = "v2.11";

    /// Query parameter carrying the page access token
    pub const ACCESS_TOKEN_PARAM: &str = "access_token";
}

/// Environment variables read by [`MessengerConfig::from_env`](crate::config::MessengerConfig::from_env)
pub mod env {
    pub const PAGE_TOKEN: &str = "MESSENGER_PAGE_TOKEN";
    pub const API_VERSION: &str = "MESSENGER_GRAPH_API_VERSION";
    pub const BASE_URL: &str = "MESSENGER_GRAPH_BASE_URL";
}

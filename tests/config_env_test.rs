//! Environment-driven configuration.
//!
//! Kept in a single test so the process-wide environment is not mutated concurrently.

use messenger_graph::prelude::*;
use secrecy::ExposeSecret;

#[test]
fn config_from_env() {
    // SAFETY: this binary runs no other test touching the environment.
    unsafe {
        std::env::remove_var("MESSENGER_PAGE_TOKEN");
        std::env::remove_var("MESSENGER_GRAPH_API_VERSION");
        std::env::remove_var("MESSENGER_GRAPH_BASE_URL");
    }
    let err = MessengerConfig::from_env().unwrap_err();
    assert!(matches!(err, MessengerError::MissingAccessToken(_)));

    unsafe {
        std::env::set_var("MESSENGER_PAGE_TOKEN", "EAAB-env-token");
        std::env::set_var("MESSENGER_GRAPH_API_VERSION", "v2.12");
        std::env::set_var("MESSENGER_GRAPH_BASE_URL", "http://127.0.0.1:9");
    }
    let config = MessengerConfig::from_env().expect("config");
    assert_eq!(config.page_token.expose_secret(), "EAAB-env-token");
    assert_eq!(config.api_version, "v2.12");
    assert_eq!(config.base_url, "http://127.0.0.1:9");

    let builder = MessengerBuilder::from_env().expect("builder");
    assert_eq!(builder.config().api_version, "v2.12");
    assert!(MessengerClient::from_env().is_ok());

    unsafe {
        std::env::set_var("MESSENGER_GRAPH_API_VERSION", "latest");
    }
    let err = MessengerConfig::from_env().unwrap_err();
    assert!(matches!(err, MessengerError::ConfigurationError(_)));

    unsafe {
        std::env::remove_var("MESSENGER_PAGE_TOKEN");
        std::env::remove_var("MESSENGER_GRAPH_API_VERSION");
        std::env::remove_var("MESSENGER_GRAPH_BASE_URL");
    }
}

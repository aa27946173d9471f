//! HTTP execution layer.

pub mod client;
pub mod graph_api;
pub mod headers;
pub mod transport;

pub use client::build_http_client_from_config;
pub use graph_api::GraphApiTransport;
pub use headers::HttpHeaderBuilder;
pub use transport::{GraphTransport, SharedTransport};

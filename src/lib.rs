//! # messenger-graph
//!
//! Typed bindings for the Messenger Platform endpoints of the Graph API:
//! broadcasts, custom labels, sponsored messages, Messenger Profile and personas.
//!
//! ## Design
//!
//! - **Request adapters**: each feature module validates its arguments, builds a
//!   [`GraphRequest`](types::GraphRequest) and hands it to a shared transport.
//! - **Injectable transport**: adapters own an `Arc<dyn GraphTransport>`. The
//!   default [`GraphApiTransport`](execution::http::GraphApiTransport) talks to
//!   `graph.facebook.com` through `reqwest`; tests and custom stacks plug in their own.
//! - **Structured errors**: [`MessengerError`] separates local validation failures
//!   from remote API failures while keeping the familiar message text.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use messenger_graph::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), MessengerError> {
//!     let client = MessengerClient::builder()
//!         .page_token("EAAB...")
//!         .build()?;
//!
//!     let label = client.custom_labels().create_custom_label("vip").await?;
//!     println!("created label: {label}");
//!
//!     let res = client.broadcast().send_broadcast(499792492764246u64, None).await?;
//!     println!("broadcast: {res}");
//!     Ok(())
//! }
//! ```

#![deny(unsafe_code)]

pub mod api;
pub mod builder;
pub mod client;
pub mod config;
pub mod defaults;
pub mod error;
pub mod execution;
pub mod observability;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use builder::MessengerBuilder;
pub use client::MessengerClient;
pub use config::MessengerConfig;
pub use error::MessengerError;

/// Commonly used types, re-exported for `use messenger_graph::prelude::*`.
pub mod prelude {
    pub use crate::api::{
        Broadcast, BroadcastRequest, CustomLabels, MessengerProfile, Personas, SponsoredMessage,
    };
    pub use crate::builder::MessengerBuilder;
    pub use crate::client::MessengerClient;
    pub use crate::config::MessengerConfig;
    pub use crate::error::MessengerError;
    pub use crate::execution::http::{GraphApiTransport, GraphTransport};
    pub use crate::types::{
        GraphBody, GraphId, GraphRequest, HttpConfig, SponsoredMessageOptions,
    };
}

//! Shared data types: request descriptors, identifiers, HTTP configuration and
//! operation option structs.

pub mod http;
pub mod id;
pub mod request;
pub mod sponsored;

pub use http::{HttpConfig, HttpConfigBuilder};
pub use id::GraphId;
pub use request::{GraphBody, GraphRequest};
pub use sponsored::SponsoredMessageOptions;

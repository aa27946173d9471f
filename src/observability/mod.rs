//! Observability: structured request logging through `tracing`.
//!
//! The crate only emits events; installing a subscriber is left to the application.

pub mod tracing;

pub use self::tracing::{
    GraphTracer, get_mask_sensitive_values, mask_sensitive_value, set_mask_sensitive_values,
};

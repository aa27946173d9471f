//! Client facade.

use std::fmt;
use std::sync::Arc;

use crate::api::{Broadcast, CustomLabels, MessengerProfile, Personas, SponsoredMessage};
use crate::builder::MessengerBuilder;
use crate::config::MessengerConfig;
use crate::error::MessengerError;
use crate::execution::http::{GraphApiTransport, GraphTransport, SharedTransport};

/// Entry point: owns the transport and hands out one adapter per API area.
///
/// Adapters share the client's transport and are cheap to create and clone.
#[derive(Clone)]
pub struct MessengerClient {
    transport: SharedTransport,
}

impl MessengerClient {
    pub fn builder() -> MessengerBuilder {
        MessengerBuilder::new()
    }

    /// Client backed by the default Graph API transport.
    pub fn new(config: MessengerConfig) -> Result<Self, MessengerError> {
        Ok(Self::with_transport(GraphApiTransport::new(&config)?))
    }

    /// Client configured from `MESSENGER_*` environment variables.
    pub fn from_env() -> Result<Self, MessengerError> {
        Self::new(MessengerConfig::from_env()?)
    }

    /// Client backed by a custom transport.
    pub fn with_transport<T: GraphTransport + 'static>(transport: T) -> Self {
        Self::from_shared_transport(Arc::new(transport))
    }

    pub fn from_shared_transport(transport: SharedTransport) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &SharedTransport {
        &self.transport
    }

    pub fn broadcast(&self) -> Broadcast {
        Broadcast::new(self.transport.clone())
    }

    pub fn custom_labels(&self) -> CustomLabels {
        CustomLabels::new(self.transport.clone())
    }

    pub fn sponsored_messages(&self) -> SponsoredMessage {
        SponsoredMessage::new(self.transport.clone())
    }

    pub fn messenger_profile(&self) -> MessengerProfile {
        MessengerProfile::new(self.transport.clone())
    }

    pub fn personas(&self) -> Personas {
        Personas::new(self.transport.clone())
    }
}

impl fmt::Debug for MessengerClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessengerClient").finish_non_exhaustive()
    }
}

// SPDX-License-Identifier: MIT

//! `ConnectorRegistry` SPI.

use crate::connector::Connector;
use xfer_core::ConnectorId;

/// External collaborator, specified only by interface. Resolves a
/// connector id to its configuration classes and callbacks; contents are
/// entirely out of this crate's scope — `xfer-manager` only ever consumes
/// this trait.
pub trait ConnectorRegistry: Send + Sync {
    fn get_connector(&self, connector_id: &ConnectorId) -> Option<Connector>;
}

#[cfg(any(test, feature = "test-support"))]
pub use fixture::InMemoryConnectorRegistry;

#[cfg(any(test, feature = "test-support"))]
mod fixture {
    use super::*;
    use parking_lot::RwLock;
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Reference registry backed by a plain map — the registry contents are
    /// out of scope, this exists only so manager/integration tests have
    /// something concrete to drive.
    #[derive(Default)]
    pub struct InMemoryConnectorRegistry {
        connectors: RwLock<HashMap<String, Connector>>,
    }

    impl InMemoryConnectorRegistry {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn register(&self, connector: Connector) {
            self.connectors.write().insert(connector.id.to_string(), connector);
        }

        pub fn shared() -> Arc<Self> {
            Arc::new(Self::new())
        }
    }

    impl ConnectorRegistry for InMemoryConnectorRegistry {
        fn get_connector(&self, connector_id: &ConnectorId) -> Option<Connector> {
            self.connectors.read().get(connector_id.as_str()).cloned()
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

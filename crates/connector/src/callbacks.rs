// SPDX-License-Identifier: MIT

//! Connector callback contracts.

use crate::context::ConnectorContext;
use crate::error::ConnectorError;
use async_trait::async_trait;
use serde_json::Value;

/// Run by the coordinator before submission: lets the connector stage
/// side-effecting resources (e.g. a staging table) and declare extra jars
/// the remote execution environment needs.
#[async_trait]
pub trait Initializer: Send + Sync {
    async fn initialize(
        &self,
        context: &ConnectorContext,
        connector_connection_config: &Value,
        connector_job_config: &Value,
    ) -> Result<(), ConnectorError>;

    /// Jars/resources discovered during initialization; appended to the
    /// request's jar list.
    fn jars(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Cleanup counterpart to [`Initializer`]. `xfer-manager` runs this both on
/// a `false` return from `submit` and when the submit call itself errors.
#[async_trait]
pub trait Destroyer: Send + Sync {
    async fn run(&self, context: &ConnectorContext) -> Result<(), ConnectorError>;
}

/// The initializer/destroyer pair for one job direction: for IMPORT, the
/// connector's importer callbacks; for EXPORT, its exporter callbacks.
#[derive(Clone)]
pub struct CallbackPair {
    pub initializer: std::sync::Arc<dyn Initializer>,
    pub destroyer: std::sync::Arc<dyn Destroyer>,
}

/// No-op destroyer for connectors with nothing to clean up.
pub struct NoopDestroyer;

#[async_trait]
impl Destroyer for NoopDestroyer {
    async fn run(&self, _context: &ConnectorContext) -> Result<(), ConnectorError> {
        Ok(())
    }
}

// SPDX-License-Identifier: MIT

//! The context handed to connector `Initializer`/`Destroyer` callbacks.

use xfer_core::{ConnectorId, JobId};

/// Opaque bag of job identity passed to callbacks. Real connectors would
/// also reach back into the connection/job config here; since those
/// configs are already materialized and passed as separate arguments, the
/// context only needs to carry identity.
#[derive(Debug, Clone)]
pub struct ConnectorContext {
    pub connector_id: ConnectorId,
    pub job_id: JobId,
}

impl ConnectorContext {
    pub fn new(connector_id: ConnectorId, job_id: JobId) -> Self {
        Self { connector_id, job_id }
    }
}

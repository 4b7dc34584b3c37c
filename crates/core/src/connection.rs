// SPDX-License-Identifier: MIT

//! `MConnection`: a named, repository-owned connection.

use crate::form::FormValues;
use crate::ids::{ConnectionId, ConnectorId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MConnection {
    pub id: ConnectionId,
    pub name: String,
    pub connector_id: ConnectorId,
    /// Generic (connector-independent) options.
    pub framework_part: FormValues,
    /// Connector-specific options.
    pub connector_part: FormValues,
}

impl MConnection {
    pub fn new(
        id: impl Into<ConnectionId>,
        name: impl Into<String>,
        connector_id: impl Into<ConnectorId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            connector_id: connector_id.into(),
            framework_part: FormValues::new(),
            connector_part: FormValues::new(),
        }
    }
}

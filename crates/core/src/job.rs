// SPDX-License-Identifier: MIT

//! `MJob`: a named, repository-owned job definition.

use crate::form::FormValues;
use crate::ids::{ConnectionId, ConnectorId, JobId};
use crate::job_type::JobType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MJob {
    pub id: JobId,
    pub name: String,
    pub job_type: JobType,
    pub connector_id: ConnectorId,
    pub connection_id: ConnectionId,
    pub framework_part: FormValues,
    pub connector_part: FormValues,
}

impl MJob {
    pub fn new(
        id: impl Into<JobId>,
        name: impl Into<String>,
        job_type: JobType,
        connector_id: impl Into<ConnectorId>,
        connection_id: impl Into<ConnectionId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            job_type,
            connector_id: connector_id.into(),
            connection_id: connection_id.into(),
            framework_part: FormValues::new(),
            connector_part: FormValues::new(),
        }
    }
}

// SPDX-License-Identifier: MIT

//! Connector descriptor, as returned by a connector registry lookup.

use crate::callbacks::CallbackPair;
use std::collections::HashMap;
use xfer_core::{ConnectorId, FormSchema, JobType};

/// What the connector registry returns for one connector id: its
/// configuration shapes and its importer/exporter callbacks.
#[derive(Clone)]
pub struct Connector {
    pub id: ConnectorId,
    pub name: String,
    pub connection_form: FormSchema,
    pub job_forms: HashMap<JobType, FormSchema>,
    pub importer: CallbackPair,
    pub exporter: CallbackPair,
}

impl Connector {
    pub fn job_form(&self, job_type: JobType) -> Option<&FormSchema> {
        self.job_forms.get(&job_type)
    }

    /// Selects the importer or exporter callback pair for this job type.
    pub fn callbacks_for(&self, job_type: JobType) -> &CallbackPair {
        match job_type {
            JobType::Import => &self.importer,
            JobType::Export => &self.exporter,
        }
    }
}

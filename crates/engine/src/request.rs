// SPDX-License-Identifier: MIT

//! `SubmissionRequest` — assembled fresh by the coordinator for every submit
//! call and handed through the execution and submission engines. Nothing
//! here outlives one `submit`.

use serde_json::Value;
use xfer_connector::CallbackPair;
use xfer_core::{ConnectorId, JobId, JobType, MSubmission};

/// The four materialized configuration objects a submit call assembles:
/// connector-side and framework-side, each split into connection-scoped
/// and job-scoped values.
#[derive(Debug, Clone, Default)]
pub struct MaterializedConfigs {
    pub connector_connection: Value,
    pub connector_job: Value,
    pub framework_connection: Value,
    pub framework_job: Value,
}

/// Ephemeral per-attempt object the execution engine builds bare
/// ([`ExecutionEngine::create_submission_request`]) and the coordinator then
/// fills in before handing it to the submission engine.
pub struct SubmissionRequest {
    pub job_type: JobType,
    pub job_name: String,
    pub job_id: JobId,
    pub connector_id: ConnectorId,
    pub summary: MSubmission,
    pub configs: MaterializedConfigs,
    /// Jar/resource identifiers the remote execution environment must ship,
    /// extended with any connector-reported jars.
    pub jars: Vec<String>,
    pub callbacks: Option<CallbackPair>,
    /// Set from the framework job config's `output_directory` field for
    /// IMPORT jobs; unused for EXPORT.
    pub output_directory: Option<String>,
}

impl SubmissionRequest {
    pub fn new(
        job_type: JobType,
        job_name: impl Into<String>,
        job_id: JobId,
        connector_id: ConnectorId,
        summary: MSubmission,
    ) -> Self {
        Self {
            job_type,
            job_name: job_name.into(),
            job_id,
            connector_id,
            summary,
            configs: MaterializedConfigs::default(),
            jars: Vec::new(),
            callbacks: None,
            output_directory: None,
        }
    }

    xfer_core::setters! {
        set {
            configs: MaterializedConfigs,
            jars: Vec<String>,
        }
        option {
            callbacks: CallbackPair,
            output_directory: String,
        }
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;

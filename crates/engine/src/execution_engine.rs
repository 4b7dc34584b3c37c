// SPDX-License-Identifier: MIT

//! `ExecutionEngine` SPI — shapes a submission request for a particular
//! cluster layout before the submission engine sees it.

use crate::error::EngineError;
use crate::request::SubmissionRequest;
use async_trait::async_trait;
use xfer_core::{ConfigSource, ConnectorId, JobId, JobType, MSubmission};
use std::sync::Arc;

#[async_trait]
pub trait ExecutionEngine: Send + Sync {
    /// Identifies this engine's kind to `SubmissionEngine::accepts`; e.g.
    /// `"mapreduce"`, `"in-memory"`.
    fn kind(&self) -> &'static str;

    async fn initialize(&self, config: Arc<dyn ConfigSource>) -> Result<(), EngineError>;
    async fn destroy(&self);

    /// Creates a bare request already carrying identity: the summary,
    /// connector, and job type/name/id. Configurations, jars, and callbacks
    /// are filled in afterward by the coordinator.
    fn create_submission_request(
        &self,
        job_type: JobType,
        job_name: String,
        job_id: JobId,
        connector_id: ConnectorId,
        summary: MSubmission,
    ) -> SubmissionRequest {
        SubmissionRequest::new(job_type, job_name, job_id, connector_id, summary)
    }

    /// Shapes `request` for an IMPORT job. Fills in engine-specific layout;
    /// `request.output_directory` is already set by the coordinator before
    /// this is called.
    async fn prepare_import_submission(&self, request: &mut SubmissionRequest) -> Result<(), EngineError>;

    /// EXPORT path is a declared placeholder; the default implementation is
    /// a no-op rather than an error so callers aren't forced to
    /// special-case EXPORT.
    async fn prepare_export_submission(&self, _request: &mut SubmissionRequest) -> Result<(), EngineError> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "execution_engine_tests.rs"]
mod tests;

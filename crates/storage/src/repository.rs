// SPDX-License-Identifier: MIT

//! The `Repository` SPI — persistence is out of this crate's scope,
//! specified only by interface.

use crate::error::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use xfer_core::{ConnectionId, JobId, MConnection, MFramework, MJob, MSubmission};

/// Persistence boundary consumed by `xfer-manager`. Schema and storage
/// engine are entirely the implementation's business; this crate ships
/// only [`MemRepository`], a reference used in tests and as a development
/// fallback.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Registers `MFramework` once per process lifetime and returns the
    /// persisted copy, carrying the assigned [`FrameworkId`].
    async fn register_framework(&self, framework: MFramework) -> Result<MFramework, RepositoryError>;

    async fn find_job(&self, job_id: &JobId) -> Option<MJob>;
    async fn find_connection(&self, connection_id: &ConnectionId) -> Option<MConnection>;

    /// Most recent submission row for `job_id`, if any.
    async fn find_last_submission(&self, job_id: &JobId) -> Option<MSubmission>;

    /// All submissions whose status is non-terminal; driven by the update
    /// worker.
    async fn find_unfinished_submissions(&self) -> Vec<MSubmission>;

    /// Persists a brand-new submission row, assigning it a `SubmissionId`.
    async fn create_submission(&self, submission: MSubmission) -> Result<MSubmission, RepositoryError>;

    async fn update_submission(&self, submission: &MSubmission) -> Result<(), RepositoryError>;

    /// Deletes every submission whose `created_at` is older than
    /// `threshold`; returns the number removed.
    async fn purge_submissions_older_than(&self, threshold: DateTime<Utc>) -> usize;
}

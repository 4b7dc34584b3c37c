// SPDX-License-Identifier: MIT

//! `MemRepository`: in-memory reference implementation of [`Repository`].
//!
//! Used by tests and as a standalone fallback; production deployments are
//! expected to supply their own [`Repository`] over whatever store they run.

use crate::error::RepositoryError;
use crate::repository::Repository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::HashMap;
use xfer_core::{ConnectionId, FrameworkId, JobId, MConnection, MFramework, MJob, MSubmission};

#[derive(Default)]
struct State {
    framework: Option<MFramework>,
    jobs: HashMap<String, MJob>,
    connections: HashMap<String, MConnection>,
    /// Submission rows keyed by their assigned id; `next_submission_id`
    /// hands out monotonically increasing ids.
    submissions: HashMap<u64, MSubmission>,
    next_submission_id: u64,
}

pub struct MemRepository {
    state: Mutex<State>,
}

impl Default for MemRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemRepository {
    pub fn new() -> Self {
        Self { state: Mutex::new(State::default()) }
    }

    /// Test/dev convenience for seeding a job+connection pair before
    /// exercising `submit`.
    pub fn seed_job(&self, job: MJob, connection: MConnection) {
        let mut state = self.state.lock();
        state.connections.insert(connection.id.to_string(), connection);
        state.jobs.insert(job.id.to_string(), job);
    }
}

#[async_trait]
impl Repository for MemRepository {
    async fn register_framework(&self, mut framework: MFramework) -> Result<MFramework, RepositoryError> {
        let mut state = self.state.lock();
        if state.framework.is_some() {
            return Err(RepositoryError::FrameworkAlreadyRegistered);
        }
        framework.id = Some(FrameworkId::new(1));
        state.framework = Some(framework.clone());
        Ok(framework)
    }

    async fn find_job(&self, job_id: &JobId) -> Option<MJob> {
        self.state.lock().jobs.get(job_id.as_str()).cloned()
    }

    async fn find_connection(&self, connection_id: &ConnectionId) -> Option<MConnection> {
        self.state.lock().connections.get(connection_id.as_str()).cloned()
    }

    async fn find_last_submission(&self, job_id: &JobId) -> Option<MSubmission> {
        self.state
            .lock()
            .submissions
            .values()
            .filter(|s| &s.job_id == job_id)
            .max_by_key(|s| s.created_at)
            .cloned()
    }

    async fn find_unfinished_submissions(&self) -> Vec<MSubmission> {
        self.state.lock().submissions.values().filter(|s| !s.is_terminal()).cloned().collect()
    }

    async fn create_submission(&self, mut submission: MSubmission) -> Result<MSubmission, RepositoryError> {
        let mut state = self.state.lock();
        let id = state.next_submission_id;
        state.next_submission_id += 1;
        submission.id = Some(xfer_core::SubmissionId::new(id));
        state.submissions.insert(id, submission.clone());
        Ok(submission)
    }

    async fn update_submission(&self, submission: &MSubmission) -> Result<(), RepositoryError> {
        let mut state = self.state.lock();
        let id = submission.id.map(|id| id.0).ok_or(RepositoryError::SubmissionNotFound(0))?;
        if !state.submissions.contains_key(&id) {
            return Err(RepositoryError::SubmissionNotFound(id));
        }
        state.submissions.insert(id, submission.clone());
        Ok(())
    }

    async fn purge_submissions_older_than(&self, threshold: DateTime<Utc>) -> usize {
        let mut state = self.state.lock();
        let before = state.submissions.len();
        state.submissions.retain(|_, s| s.created_at >= threshold);
        before - state.submissions.len()
    }
}

#[cfg(test)]
#[path = "mem_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT

//! `MSubmission`: the runtime record of one attempt to run a job.
//!
//! Mutated only by the coordinator (`xfer-manager`) and the update worker;
//! this type itself just holds the row and the invariant-preserving
//! constructors/mutators so callers cannot build a value with an external id
//! attached before the submission engine has actually assigned one.

use crate::ids::{JobId, SubmissionId};
use crate::status::SubmissionStatus;
use crate::Counters;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel for "progress unknown": progress is otherwise in `[0, 1]`.
pub const PROGRESS_UNKNOWN: f64 = -1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MSubmission {
    /// `None` until the repository assigns one on create.
    pub id: Option<SubmissionId>,
    pub job_id: JobId,
    pub created_at: DateTime<Utc>,
    pub last_update_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub progress: f64,
    pub counters: Option<Counters>,
    pub external_link: Option<String>,
    /// Assigned by the submission engine once it accepts the job.
    pub external_id: Option<String>,
}

impl MSubmission {
    /// A freshly booting submission, about to be handed to the submission
    /// engine. Has no external id yet — callers must attach one (or route
    /// to [`Self::failed_on_submit`]) before persisting.
    pub fn booting(job_id: JobId, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            job_id,
            created_at: now,
            last_update_at: now,
            status: SubmissionStatus::Booting,
            progress: PROGRESS_UNKNOWN,
            counters: None,
            external_link: None,
            external_id: None,
        }
    }

    /// The local, synthetic edge of the state machine: the submission
    /// engine rejected or threw during `submit`. No external id is ever
    /// attached.
    pub fn failed_on_submit(job_id: JobId, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            job_id,
            created_at: now,
            last_update_at: now,
            status: SubmissionStatus::FailureOnSubmit,
            progress: PROGRESS_UNKNOWN,
            counters: None,
            external_link: None,
            external_id: None,
        }
    }

    /// A transient, never-persisted row returned by `status()` when no
    /// submission exists for a job.
    pub fn never_executed(job_id: JobId, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            job_id,
            created_at: now,
            last_update_at: now,
            status: SubmissionStatus::NeverExecuted,
            progress: PROGRESS_UNKNOWN,
            counters: None,
            external_link: None,
            external_id: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Apply one refresh cycle of `update`: while running, track progress
    /// and drop counters; once settled, freeze progress at -1 and record
    /// final counters.
    pub fn apply_update(
        &mut self,
        status: SubmissionStatus,
        external_link: Option<String>,
        progress_or_counters: ProgressOrCounters,
        now: DateTime<Utc>,
    ) {
        self.status = status;
        self.external_link = external_link;
        match progress_or_counters {
            ProgressOrCounters::Progress(p) => {
                self.progress = p;
                self.counters = None;
            }
            ProgressOrCounters::Counters(c) => {
                self.progress = PROGRESS_UNKNOWN;
                self.counters = Some(c);
            }
        }
        self.last_update_at = now;
    }
}

/// Which half of the update step applied on the last poll.
#[derive(Debug, Clone)]
pub enum ProgressOrCounters {
    Progress(f64),
    Counters(Counters),
}

#[cfg(test)]
#[path = "submission_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT

//! Test fixtures shared across crates (gated behind `test-support`).

use crate::connection::MConnection;
use crate::job::MJob;
use crate::job_type::JobType;
use crate::submission::MSubmission;

pub fn fixture_connection() -> MConnection {
    MConnection::new("conn-1", "test-connection", "connector-1")
}

pub fn fixture_job(job_type: JobType) -> MJob {
    MJob::new("job-17", "test-job", job_type, "connector-1", "conn-1")
}

pub fn fixture_submission(job_id: &str) -> MSubmission {
    MSubmission::booting(job_id.into(), chrono::Utc::now())
}

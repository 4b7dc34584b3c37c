//! Retention-threshold purging, exercised against the real purge worker
//! spawned by `initialize` rather than by calling the worker function
//! directly.

use std::time::Duration;

use chrono::Duration as ChronoDuration;
use xfer_core::MSubmission;
use xfer_storage::Repository as _;

use crate::harness::harness_for;

#[tokio::test]
async fn background_purge_worker_retains_only_submissions_within_the_threshold() {
    let h = harness_for("job-purge").await;
    let job_id: xfer_core::JobId = "job-purge".into();
    let now = h.clock.now();

    h.repository
        .create_submission(MSubmission::booting(job_id.clone(), now - ChronoDuration::hours(1)))
        .await
        .unwrap();
    h.repository
        .create_submission(MSubmission::booting(job_id.clone(), now - ChronoDuration::hours(25)))
        .await
        .unwrap();
    h.repository
        .create_submission(MSubmission::booting(job_id, now - ChronoDuration::hours(100)))
        .await
        .unwrap();
    assert_eq!(h.repository.find_unfinished_submissions().await.len(), 3);

    // Defaults (24h threshold, fast test-only sleep from the harness) mean
    // the first purge tick should already have dropped the two stale rows.
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(h.repository.find_unfinished_submissions().await.len(), 1);

    h.manager.destroy().await;
}

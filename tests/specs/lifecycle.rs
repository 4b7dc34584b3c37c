//! End-to-end flow: submit an import job, let the real update worker (not
//! the `update_submission` primitive called directly) observe the
//! backend's transition to a terminal state, then confirm `status`
//! reflects it and the job is no longer polled.

use std::time::Duration;

use xfer_core::SubmissionStatus;
use xfer_storage::Repository as _;

use crate::harness::harness_for;

#[tokio::test]
async fn update_worker_drives_a_submission_to_terminal_without_interactive_calls() {
    let h = harness_for("job-e2e").await;
    let job_id: xfer_core::JobId = "job-e2e".into();

    let submission = h.manager.submit(&job_id).await.unwrap();
    assert_eq!(submission.status, SubmissionStatus::Booting);
    let external_id = submission.external_id.clone().unwrap();

    assert_eq!(h.repository.find_unfinished_submissions().await.len(), 1);

    // Drive the backend to SUCCEEDED and let the background update worker
    // (spawned inside `initialize`, on a fast interval here) pick it up —
    // no direct call to `status`/`stop` in between.
    h.submission_engine.set_status(&external_id, SubmissionStatus::Succeeded);

    let mut observed = SubmissionStatus::Booting;
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(20)).await;
        if let Some(latest) = h.repository.find_last_submission(&job_id).await {
            observed = latest.status;
            if observed.is_terminal() {
                break;
            }
        }
    }

    assert_eq!(observed, SubmissionStatus::Succeeded);
    assert!(h.repository.find_unfinished_submissions().await.is_empty());

    h.manager.destroy().await;
}

#[tokio::test]
async fn stop_is_advisory_and_status_reflects_the_engines_view_afterward() {
    let h = harness_for("job-stop").await;
    let job_id: xfer_core::JobId = "job-stop".into();

    let submission = h.manager.submit(&job_id).await.unwrap();
    let external_id = submission.external_id.clone().unwrap();

    // The fake backend doesn't actually honor `stop` by changing status;
    // `stop` is only required to be best-effort, with the record
    // reflecting whatever the engine reports afterward, running or not.
    let after_stop = h.manager.stop(&job_id).await.unwrap();
    assert_eq!(h.submission_engine.stop_calls(), vec![external_id.clone()]);
    assert!(after_stop.is_running());

    h.submission_engine.set_status(&external_id, SubmissionStatus::Failed);
    let status = h.manager.status(&job_id).await.unwrap();
    assert_eq!(status.status, SubmissionStatus::Failed);

    h.manager.destroy().await;
}

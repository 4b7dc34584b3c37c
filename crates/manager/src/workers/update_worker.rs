// SPDX-License-Identifier: MIT

//! The update worker: periodically refreshes every unfinished submission.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::warn;
use xfer_core::Clock;
use xfer_engine::SubmissionEngine;
use xfer_storage::Repository;

use crate::coordinator::update_submission;

/// Runs until `cancel` fires. Each tick loads every non-terminal submission
/// and refreshes it; a single submission's refresh failing is logged and
/// skipped rather than aborting the tick.
pub(crate) async fn run<C: Clock>(
    repository: Arc<dyn Repository>,
    submission_engine: Arc<dyn SubmissionEngine>,
    clock: C,
    sleep: Duration,
    cancel: CancellationToken,
) {
    loop {
        if cancel.is_cancelled() {
            break;
        }

        let unfinished = repository.find_unfinished_submissions().await;
        for mut submission in unfinished {
            let job_id = submission.job_id.clone();
            if let Err(err) =
                update_submission(repository.as_ref(), submission_engine.as_ref(), &clock, &mut submission).await
            {
                warn!(%job_id, error = %err, "update worker: refresh failed, will retry next tick");
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(sleep) => {}
            _ = cancel.cancelled() => break,
        }
    }
}

#[cfg(test)]
#[path = "update_worker_tests.rs"]
mod tests;

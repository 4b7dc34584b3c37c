// SPDX-License-Identifier: MIT

//! The purge worker: deletes submissions older than a retention threshold
//! on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use chrono::Duration as ChronoDuration;
use tokio_util::sync::CancellationToken;
use tracing::info;
use xfer_core::Clock;
use xfer_storage::Repository;

/// Runs until `cancel` fires. Purge semantics (what "older than" means, how
/// deletion is implemented) are entirely the repository's business; this
/// loop only computes the cutoff and supplies it.
pub(crate) async fn run<C: Clock>(
    repository: Arc<dyn Repository>,
    clock: C,
    threshold: Duration,
    sleep: Duration,
    cancel: CancellationToken,
) {
    let threshold = ChronoDuration::from_std(threshold).unwrap_or(ChronoDuration::zero());

    loop {
        if cancel.is_cancelled() {
            break;
        }

        let cutoff = clock.now() - threshold;
        let removed = repository.purge_submissions_older_than(cutoff).await;
        if removed > 0 {
            info!(removed, %cutoff, "purged stale submissions");
        }

        tokio::select! {
            _ = tokio::time::sleep(sleep) => {}
            _ = cancel.cancelled() => break,
        }
    }
}

#[cfg(test)]
#[path = "purge_worker_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT

//! Reads the numeric worker-tuning configuration keys, with their defaults.

use std::time::Duration;
use xfer_core::ConfigSource;

pub(crate) const DEFAULT_PURGE_THRESHOLD_MS: u64 = 86_400_000;
pub(crate) const DEFAULT_PURGE_SLEEP_MS: u64 = 86_400_000;
pub(crate) const DEFAULT_UPDATE_SLEEP_MS: u64 = 300_000;

/// The three worker tunables read once at `initialize`.
#[derive(Debug, Clone, Copy)]
pub struct WorkerIntervals {
    pub purge_threshold: Duration,
    pub purge_sleep: Duration,
    pub update_sleep: Duration,
}

impl WorkerIntervals {
    pub(crate) fn read(config: &dyn ConfigSource) -> Self {
        Self {
            purge_threshold: Duration::from_millis(
                config.get_u64("submission.purge.threshold_ms").unwrap_or(DEFAULT_PURGE_THRESHOLD_MS),
            ),
            purge_sleep: Duration::from_millis(
                config.get_u64("submission.purge.sleep_ms").unwrap_or(DEFAULT_PURGE_SLEEP_MS),
            ),
            update_sleep: Duration::from_millis(
                config.get_u64("submission.update.sleep_ms").unwrap_or(DEFAULT_UPDATE_SLEEP_MS),
            ),
        }
    }
}

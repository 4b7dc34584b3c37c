// SPDX-License-Identifier: MIT

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::panic))]

//! xfer-manager: the submission manager's lifecycle, coordinator, and
//! background workers.
//!
//! [`lifecycle::SubmissionManager`] is the public entry point: an owned
//! service value threaded through callers, deliberately not ambient/global
//! state, exposing `initialize`, `destroy`, `submit`, `stop`, and `status`.

mod config;
mod coordinator;
mod error;
mod lifecycle;
mod workers;

#[cfg(test)]
mod fixtures;

pub use config::WorkerIntervals;
pub use error::ManagerError;
pub use lifecycle::{SubmissionManager, EXECUTION_ENGINE_KEY, SUBMISSION_ENGINE_KEY};

/// Installs a `tracing-subscriber` `fmt` layer driven by `RUST_LOG`. The
/// manager itself only emits `tracing` events; wiring a subscriber is an
/// embedder's choice, so this helper is opt-in behind the `tracing-init`
/// feature for integration tests and standalone binaries that want a sane
/// default.
#[cfg(feature = "tracing-init")]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
}

// SPDX-License-Identifier: MIT

//! `SubmissionEngine` SPI — the driver-facing contract for submitting,
//! stopping, and polling submissions on a remote cluster.

use crate::error::EngineError;
use crate::request::SubmissionRequest;
use async_trait::async_trait;
use xfer_core::{ConfigSource, Counters, SubmissionStatus};
use std::sync::Arc;

/// Backend that accepts submissions and reports their remote status. An
/// implementation declares, via [`accepts`](SubmissionEngine::accepts),
/// which execution engines it can drive — checked once at manager init
/// time.
#[async_trait]
pub trait SubmissionEngine: Send + Sync {
    async fn initialize(&self, config: Arc<dyn ConfigSource>) -> Result<(), EngineError>;
    async fn destroy(&self);

    /// Whether this submission engine can drive the named execution engine
    /// kind.
    fn accepts(&self, execution_engine_kind: &str) -> bool;

    /// Submits `request` to the remote cluster. Returns `true` and attaches
    /// an external id to `request.summary` when the cluster accepted the
    /// job; `false` for a locally-detectable rejection.
    async fn submit(&self, request: &mut SubmissionRequest) -> Result<bool, EngineError>;

    /// Best-effort remote cancellation; advisory only.
    async fn stop(&self, external_id: &str) -> Result<(), EngineError>;

    async fn status(&self, external_id: &str) -> Result<SubmissionStatus, EngineError>;
    async fn progress(&self, external_id: &str) -> Result<f64, EngineError>;
    async fn stats(&self, external_id: &str) -> Result<Option<Counters>, EngineError>;
    async fn external_link(&self, external_id: &str) -> Result<Option<String>, EngineError>;
}

#[cfg(test)]
#[path = "submission_engine_tests.rs"]
mod tests;

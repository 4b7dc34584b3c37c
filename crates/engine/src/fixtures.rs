// SPDX-License-Identifier: MIT

//! Reference in-memory engines used across the workspace's tests, gated
//! behind the `test-support` feature.

use crate::error::EngineError;
use crate::execution_engine::ExecutionEngine;
use crate::request::SubmissionRequest;
use crate::submission_engine::SubmissionEngine;
use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use xfer_core::{ConfigSource, Counters, SubmissionStatus};

/// Per-submission state tracked by [`InMemorySubmissionEngine`], keyed by
/// the external id it hands back from `submit`.
#[derive(Clone)]
struct RemoteJob {
    status: SubmissionStatus,
    progress: f64,
    counters: Option<Counters>,
    external_link: Option<String>,
}

/// A fake submission engine whose acceptance and reported status are driven
/// entirely by test setup, used to exercise the coordinator and workers
/// without a real cluster.
pub struct InMemorySubmissionEngine {
    kind: &'static str,
    next_id: AtomicU64,
    accept: std::sync::atomic::AtomicBool,
    jobs: RwLock<HashMap<String, RemoteJob>>,
    stop_calls: Mutex<Vec<String>>,
    init_calls: AtomicU64,
    destroy_calls: AtomicU64,
    submit_delay: Mutex<Option<Duration>>,
}

impl InMemorySubmissionEngine {
    pub fn new(accepted_execution_engine_kind: &'static str) -> Self {
        Self {
            kind: accepted_execution_engine_kind,
            next_id: AtomicU64::new(1),
            accept: std::sync::atomic::AtomicBool::new(true),
            jobs: RwLock::new(HashMap::new()),
            stop_calls: Mutex::new(Vec::new()),
            init_calls: AtomicU64::new(0),
            destroy_calls: AtomicU64::new(0),
            submit_delay: Mutex::new(None),
        }
    }

    /// Makes the next `submit` call sleep for `delay` before accepting,
    /// simulating a slow backend so tests can observe whether other
    /// operations are blocked behind it.
    pub fn delay_next_submit(&self, delay: Duration) {
        *self.submit_delay.lock() = Some(delay);
    }

    pub fn shared(accepted_execution_engine_kind: &'static str) -> Arc<Self> {
        Arc::new(Self::new(accepted_execution_engine_kind))
    }

    /// Make the next `submit` call return `false`.
    pub fn reject_next_submit(&self) {
        self.accept.store(false, Ordering::SeqCst);
    }

    pub fn stop_calls(&self) -> Vec<String> {
        self.stop_calls.lock().clone()
    }

    /// Used by `xfer-manager`'s lifecycle tests to check that exactly one
    /// `initialize` happens before any `submit`/`stop`/`status`, and
    /// exactly one `destroy` happens after workers joined.
    pub fn init_call_count(&self) -> u64 {
        self.init_calls.load(Ordering::SeqCst)
    }

    pub fn destroy_call_count(&self) -> u64 {
        self.destroy_calls.load(Ordering::SeqCst)
    }

    /// Drives the remote status reported for `external_id` (used by tests
    /// to simulate the update worker observing a transition to terminal).
    pub fn set_status(&self, external_id: &str, status: SubmissionStatus) {
        if let Some(job) = self.jobs.write().get_mut(external_id) {
            job.status = status;
        }
    }
}

#[async_trait]
impl SubmissionEngine for InMemorySubmissionEngine {
    async fn initialize(&self, _config: Arc<dyn ConfigSource>) -> Result<(), EngineError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn destroy(&self) {
        self.destroy_calls.fetch_add(1, Ordering::SeqCst);
    }

    fn accepts(&self, execution_engine_kind: &str) -> bool {
        execution_engine_kind == self.kind
    }

    async fn submit(&self, request: &mut SubmissionRequest) -> Result<bool, EngineError> {
        if let Some(delay) = self.submit_delay.lock().take() {
            tokio::time::sleep(delay).await;
        }

        if !self.accept.load(Ordering::SeqCst) {
            // One-shot rejection, matching how a real cluster's transient
            // refusal wouldn't repeat on the very next attempt.
            self.accept.store(true, Ordering::SeqCst);
            return Ok(false);
        }

        let external_id = format!("X-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.jobs.write().insert(
            external_id.clone(),
            RemoteJob {
                status: SubmissionStatus::Booting,
                progress: xfer_core::PROGRESS_UNKNOWN,
                counters: None,
                external_link: Some(format!("https://cluster.example/jobs/{external_id}")),
            },
        );
        request.summary.external_id = Some(external_id);
        Ok(true)
    }

    async fn stop(&self, external_id: &str) -> Result<(), EngineError> {
        self.stop_calls.lock().push(external_id.to_string());
        Ok(())
    }

    async fn status(&self, external_id: &str) -> Result<SubmissionStatus, EngineError> {
        Ok(self
            .jobs
            .read()
            .get(external_id)
            .map(|j| j.status)
            .unwrap_or(SubmissionStatus::Unknown))
    }

    async fn progress(&self, external_id: &str) -> Result<f64, EngineError> {
        Ok(self.jobs.read().get(external_id).map(|j| j.progress).unwrap_or(xfer_core::PROGRESS_UNKNOWN))
    }

    async fn stats(&self, external_id: &str) -> Result<Option<Counters>, EngineError> {
        Ok(self.jobs.read().get(external_id).and_then(|j| j.counters.clone()))
    }

    async fn external_link(&self, external_id: &str) -> Result<Option<String>, EngineError> {
        Ok(self.jobs.read().get(external_id).and_then(|j| j.external_link.clone()))
    }
}

/// Bare-bones execution engine that does no real shaping; its only
/// purpose in tests is to produce a `SubmissionRequest` and declare a kind
/// so compatibility checking has something to compare against.
pub struct InMemoryExecutionEngine {
    kind: &'static str,
    init_calls: AtomicU64,
    destroy_calls: AtomicU64,
}

impl InMemoryExecutionEngine {
    pub fn new(kind: &'static str) -> Self {
        Self { kind, init_calls: AtomicU64::new(0), destroy_calls: AtomicU64::new(0) }
    }

    pub fn shared(kind: &'static str) -> Arc<Self> {
        Arc::new(Self::new(kind))
    }

    pub fn init_call_count(&self) -> u64 {
        self.init_calls.load(Ordering::SeqCst)
    }

    pub fn destroy_call_count(&self) -> u64 {
        self.destroy_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExecutionEngine for InMemoryExecutionEngine {
    fn kind(&self) -> &'static str {
        self.kind
    }

    async fn initialize(&self, _config: Arc<dyn ConfigSource>) -> Result<(), EngineError> {
        self.init_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn destroy(&self) {
        self.destroy_calls.fetch_add(1, Ordering::SeqCst);
    }

    async fn prepare_import_submission(&self, _request: &mut SubmissionRequest) -> Result<(), EngineError> {
        Ok(())
    }
}

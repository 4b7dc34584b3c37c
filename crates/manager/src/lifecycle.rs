// SPDX-License-Identifier: MIT

//! `SubmissionManager`: the process-wide lifecycle owner.
//!
//! Owns the two resolved engines, the registered `MFramework`, and the
//! update/purge worker handles. `initialize`/`destroy` are serialized
//! against each other and idempotent; `submit` additionally serializes
//! against itself through a second, narrower mutex scoped to its final
//! guarded step, preserving the single-active-submission invariant.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use parking_lot::RwLock as SyncRwLock;
use tokio::sync::Mutex as AsyncMutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use xfer_connector::ConnectorRegistry;
use xfer_core::{Clock, ConfigSource, JobId, MFramework, MSubmission, SystemClock};
use xfer_engine::{EngineRegistry, ExecutionEngine, SubmissionEngine};
use xfer_storage::Repository;

use crate::config::WorkerIntervals;
use crate::coordinator::{prepare_submission, submit_guarded, update_submission, SubmitContext};
use crate::error::ManagerError;
use crate::workers::{purge_worker, update_worker};

/// Config keys naming the engines to resolve at init, by registry name
/// rather than by class name.
pub const SUBMISSION_ENGINE_KEY: &str = "submission_engine";
pub const EXECUTION_ENGINE_KEY: &str = "execution_engine";

/// The resolved engines and registered framework, valid only between
/// `initialize` and `destroy`. Held behind a `parking_lot::RwLock` and
/// snapshotted via `Arc` clone so `submit`/`stop`/`status` never hold a lock
/// for the duration of an engine call — only long enough to grab a
/// reference-counted handle to the currently active state (spec §5:
/// interactive operations may run concurrently with one another).
struct Active {
    framework: MFramework,
    submission_engine: Arc<dyn SubmissionEngine>,
    execution_engine: Arc<dyn ExecutionEngine>,
}

/// Worker handles, touched only by `initialize`/`destroy`, which are
/// serialized against each other via `lifecycle_guard`.
struct WorkerHandles {
    cancel: CancellationToken,
    update_handle: JoinHandle<()>,
    purge_handle: JoinHandle<()>,
}

pub struct SubmissionManager<C: Clock = SystemClock> {
    repository: Arc<dyn Repository>,
    connector_registry: Arc<dyn ConnectorRegistry>,
    engine_registry: Arc<EngineRegistry>,
    config: Arc<dyn ConfigSource>,
    clock: C,
    /// Serializes `initialize`/`destroy` against each other. Never taken by
    /// `submit`/`stop`/`status`.
    lifecycle_guard: AsyncMutex<Option<WorkerHandles>>,
    /// The actual published state, read by every interactive operation.
    active: SyncRwLock<Option<Arc<Active>>>,
    /// The process-wide submission mutex: the single-active-submission
    /// guarantee is local to this process, so the mutex only needs to be
    /// process-wide. Guards only the final guarded step of `submit`, not
    /// the whole call.
    submission_mutex: AsyncMutex<()>,
}

impl<C: Clock> SubmissionManager<C> {
    pub fn new(
        repository: Arc<dyn Repository>,
        connector_registry: Arc<dyn ConnectorRegistry>,
        engine_registry: Arc<EngineRegistry>,
        config: Arc<dyn ConfigSource>,
        clock: C,
    ) -> Self {
        Self {
            repository,
            connector_registry,
            engine_registry,
            config,
            clock,
            lifecycle_guard: AsyncMutex::new(None),
            active: SyncRwLock::new(None),
            submission_mutex: AsyncMutex::new(()),
        }
    }

    /// Snapshot of the currently active engines/framework, or
    /// `ManagerError::NotInitialized`. Holds the `parking_lot` read lock only
    /// long enough to clone the `Arc`.
    fn active_snapshot(&self) -> Result<Arc<Active>, ManagerError> {
        self.active.read().clone().ok_or(ManagerError::NotInitialized)
    }

    /// `framework_schema` is the in-memory `MFramework` built from the
    /// embedder's fixed configuration classes; that construction is out of
    /// this crate's scope. Idempotent: a second call while already
    /// initialized is a no-op.
    pub async fn initialize(&self, framework_schema: MFramework) -> Result<(), ManagerError> {
        let mut handles_guard = self.lifecycle_guard.lock().await;
        if handles_guard.is_some() {
            debug!("initialize called while already initialized; ignoring");
            return Ok(());
        }

        let framework = self.repository.register_framework(framework_schema).await?;

        let submission_engine_name = self
            .config
            .get(SUBMISSION_ENGINE_KEY)
            .ok_or_else(|| ManagerError::SubmissionEngineNotInstantiable(SUBMISSION_ENGINE_KEY.to_string()))?;
        let submission_engine = self
            .engine_registry
            .build_submission_engine(&submission_engine_name)
            .ok_or_else(|| ManagerError::SubmissionEngineNotInstantiable(submission_engine_name.clone()))?;

        let execution_engine_name = self
            .config
            .get(EXECUTION_ENGINE_KEY)
            .ok_or_else(|| ManagerError::ExecutionEngineNotInstantiable(EXECUTION_ENGINE_KEY.to_string()))?;
        let execution_engine = self
            .engine_registry
            .build_execution_engine(&execution_engine_name)
            .ok_or_else(|| ManagerError::ExecutionEngineNotInstantiable(execution_engine_name.clone()))?;

        if !submission_engine.accepts(execution_engine.kind()) {
            return Err(ManagerError::IncompatibleEnginePair);
        }

        submission_engine
            .initialize(self.config.clone())
            .await
            .map_err(|_| ManagerError::SubmissionEngineNotInstantiable("initialize() failed".to_string()))?;
        execution_engine
            .initialize(self.config.clone())
            .await
            .map_err(|_| ManagerError::ExecutionEngineNotInstantiable("initialize() failed".to_string()))?;

        let intervals = WorkerIntervals::read(self.config.as_ref());
        let cancel = CancellationToken::new();

        let update_handle = tokio::spawn(update_worker::run(
            self.repository.clone(),
            submission_engine.clone(),
            self.clock.clone(),
            intervals.update_sleep,
            cancel.clone(),
        ));
        let purge_handle = tokio::spawn(purge_worker::run(
            self.repository.clone(),
            self.clock.clone(),
            intervals.purge_threshold,
            intervals.purge_sleep,
            cancel.clone(),
        ));

        info!(submission_engine = %submission_engine_name, execution_engine = %execution_engine_name, "submission manager initialized");
        *self.active.write() = Some(Arc::new(Active { framework, submission_engine, execution_engine }));
        *handles_guard = Some(WorkerHandles { cancel, update_handle, purge_handle });
        Ok(())
    }

    /// Stop workers, then destroy engines. A no-op if not initialized.
    pub async fn destroy(&self) {
        let mut handles_guard = self.lifecycle_guard.lock().await;
        let Some(handles) = handles_guard.take() else {
            debug!("destroy called while not initialized; ignoring");
            return;
        };

        handles.cancel.cancel();
        const JOIN_TIMEOUT: StdDuration = StdDuration::from_secs(10);
        if tokio::time::timeout(JOIN_TIMEOUT, handles.update_handle).await.is_err() {
            warn!("update worker did not join before timeout; continuing shutdown");
        }
        if tokio::time::timeout(JOIN_TIMEOUT, handles.purge_handle).await.is_err() {
            warn!("purge worker did not join before timeout; continuing shutdown");
        }

        // Dropping the published snapshot here only drops this Arc's share;
        // any in-flight submit/stop/status holding their own clone keeps the
        // engines alive until they finish, so destroy() below races only
        // against new interactive calls, which now see `NotInitialized`.
        if let Some(active) = self.active.write().take() {
            active.submission_engine.destroy().await;
            active.execution_engine.destroy().await;
        }
        info!("submission manager destroyed");
    }

    /// Loads, assembles, and submits a job; enforces the
    /// single-active-submission invariant under the submission mutex.
    pub async fn submit(&self, job_id: &JobId) -> Result<MSubmission, ManagerError> {
        let active = self.active_snapshot()?;

        let ctx = SubmitContext {
            repository: self.repository.as_ref(),
            connector_registry: self.connector_registry.as_ref(),
            execution_engine: active.execution_engine.as_ref(),
            submission_engine: active.submission_engine.as_ref(),
            framework: &active.framework,
            clock: &self.clock,
        };

        let request = prepare_submission(&ctx, job_id).await?;

        let _guard = self.submission_mutex.lock().await;
        submit_guarded(&ctx, job_id, request).await
    }

    /// Stop the job's latest submission, then refresh it so the returned
    /// record reflects the post-stop state.
    pub async fn stop(&self, job_id: &JobId) -> Result<MSubmission, ManagerError> {
        let active = self.active_snapshot()?;

        let mut submission = self
            .repository
            .find_last_submission(job_id)
            .await
            .filter(|s| s.is_running())
            .ok_or_else(|| ManagerError::StopOnNonRunning(job_id.to_string()))?;

        if let Some(external_id) = submission.external_id.clone() {
            if let Err(err) = active.submission_engine.stop(&external_id).await {
                warn!(%job_id, error = %err, "stop call to submission engine failed; stop is advisory only");
            }
        }

        update_submission(self.repository.as_ref(), active.submission_engine.as_ref(), &self.clock, &mut submission)
            .await?;
        Ok(submission)
    }

    /// The latest submission, refreshed; a transient `NEVER_EXECUTED`
    /// record with no persistence side effect if none exists yet.
    pub async fn status(&self, job_id: &JobId) -> Result<MSubmission, ManagerError> {
        let active = self.active_snapshot()?;

        let Some(mut submission) = self.repository.find_last_submission(job_id).await else {
            return Ok(MSubmission::never_executed(job_id.clone(), self.clock.now()));
        };

        update_submission(self.repository.as_ref(), active.submission_engine.as_ref(), &self.clock, &mut submission)
            .await?;
        Ok(submission)
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT

//! The `submit`/`stop`/`status` operations and the shared `update` refresh
//! primitive.
//!
//! Kept free of the lifecycle/worker plumbing in [`crate::lifecycle`] so the
//! three interactive operations and the background update worker can share
//! exactly one implementation of "refresh a submission from the engine".

use tracing::{debug, info, warn};
use xfer_connector::{materialize, ConnectorContext, ConnectorRegistry};
use xfer_core::{Clock, JobId, JobType, MFramework, MSubmission, ProgressOrCounters};
use xfer_engine::{ExecutionEngine, MaterializedConfigs, SubmissionEngine, SubmissionRequest};
use xfer_storage::Repository;

use crate::error::ManagerError;

/// Refreshes `submission` from the submission engine in place and persists
/// it. Shared verbatim between `status`/`stop` and the update worker.
///
/// A no-op for submissions that never reached the engine (no external id,
/// e.g. `FAILURE_ON_SUBMIT`) or that already settled into a terminal state —
/// there is nothing left to poll for either.
pub(crate) async fn update_submission<C: Clock>(
    repository: &dyn Repository,
    submission_engine: &dyn SubmissionEngine,
    clock: &C,
    submission: &mut MSubmission,
) -> Result<(), ManagerError> {
    if submission.is_terminal() {
        return Ok(());
    }
    let Some(external_id) = submission.external_id.clone() else {
        return Ok(());
    };

    let status = submission_engine.status(&external_id).await?;
    let external_link = submission_engine.external_link(&external_id).await?;
    let progress_or_counters = if status.is_running() {
        ProgressOrCounters::Progress(submission_engine.progress(&external_id).await?)
    } else {
        ProgressOrCounters::Counters(submission_engine.stats(&external_id).await?.unwrap_or_default())
    };

    debug!(job_id = %submission.job_id, external_id, %status, "polled submission status");
    submission.apply_update(status, external_link, progress_or_counters, clock.now());
    repository.update_submission(submission).await?;
    Ok(())
}

/// Everything `submit` needs from the manager besides the process-wide
/// submission mutex, which the caller holds around the final guarded step.
pub(crate) struct SubmitContext<'a, C: Clock> {
    pub repository: &'a dyn Repository,
    pub connector_registry: &'a dyn ConnectorRegistry,
    pub execution_engine: &'a dyn ExecutionEngine,
    pub submission_engine: &'a dyn SubmissionEngine,
    pub framework: &'a MFramework,
    pub clock: &'a C,
}

/// Loads, materializes, assembles, declares resources, selects and runs the
/// connector initializer, and prepares the framework side. Returns the
/// fully-assembled request, ready for the guarded submission region, which
/// the caller runs separately so it can be scoped under the process-wide
/// submission mutex.
pub(crate) async fn prepare_submission<C: Clock>(
    ctx: &SubmitContext<'_, C>,
    job_id: &JobId,
) -> Result<SubmissionRequest, ManagerError> {
    // Step 1: load job, connection, connector.
    let job = ctx
        .repository
        .find_job(job_id)
        .await
        .ok_or_else(|| ManagerError::UnknownJob(job_id.to_string()))?;
    let connection = ctx
        .repository
        .find_connection(&job.connection_id)
        .await
        .ok_or_else(|| ManagerError::UnknownJob(job_id.to_string()))?;
    let connector = ctx
        .connector_registry
        .get_connector(&job.connector_id)
        .ok_or_else(|| ManagerError::UnknownJob(job_id.to_string()))?;

    // Step 2: materialize the four configuration objects.
    let connector_job_form = connector.job_form(job.job_type).cloned().unwrap_or_default();
    let framework_job_form = ctx.framework.job_form(job.job_type).cloned().unwrap_or_default();
    let configs = MaterializedConfigs {
        connector_connection: materialize(&connector.connection_form, &connection.connector_part)?,
        connector_job: materialize(&connector_job_form, &job.connector_part)?,
        framework_connection: materialize(&ctx.framework.connection_form, &connection.framework_part)?,
        framework_job: materialize(&framework_job_form, &job.framework_part)?,
    };

    // Step 3: assemble the request via the execution engine.
    let summary = MSubmission::booting(job_id.clone(), ctx.clock.now());
    let mut request = ctx.execution_engine.create_submission_request(
        job.job_type,
        job.name.clone(),
        job_id.clone(),
        job.connector_id.clone(),
        summary,
    );
    request.configs = configs;

    // Step 4: declare the jars the remote execution environment must ship.
    request.jars = vec![
        "xfer-core.jar".to_string(),
        "xfer-manager.jar".to_string(),
        "xfer-connector.jar".to_string(),
        format!("{}.jar", ctx.execution_engine.kind()),
        format!("{}.jar", connector.name),
        "serde_json.jar".to_string(),
    ];

    // Step 5: select importer/exporter callbacks for this job type. JobType
    // is a closed two-variant enum, so an "unsupported job type" branch is
    // unreachable here by construction.
    let callbacks = connector.callbacks_for(job.job_type).clone();

    // Step 6: run the connector's initializer, then append any jars it reports.
    let context = ConnectorContext::new(job.connector_id.clone(), job_id.clone());
    callbacks
        .initializer
        .initialize(&context, &request.configs.connector_connection, &request.configs.connector_job)
        .await
        .map_err(|err| ManagerError::CallbackNotInstantiable(format!("{job_id}: {err}")))?;
    request.jars.extend(callbacks.initializer.jars());
    request.callbacks = Some(callbacks);

    // Step 7: prepare the framework side.
    match job.job_type {
        JobType::Import => {
            if let Some(output_directory) =
                request.configs.framework_job.get("output_directory").and_then(|v| v.as_str())
            {
                request.output_directory = Some(output_directory.to_string());
            }
            ctx.execution_engine.prepare_import_submission(&mut request).await?;
        }
        JobType::Export => {
            ctx.execution_engine.prepare_export_submission(&mut request).await?;
        }
    }

    Ok(request)
}

/// Run while the caller holds the process-wide submission mutex: re-check
/// the single-active-submission invariant, submit, and persist the outcome
/// either way.
pub(crate) async fn submit_guarded<C: Clock>(
    ctx: &SubmitContext<'_, C>,
    job_id: &JobId,
    mut request: SubmissionRequest,
) -> Result<MSubmission, ManagerError> {
    if let Some(last) = ctx.repository.find_last_submission(job_id).await {
        if last.is_running() {
            return Err(ManagerError::AlreadyRunning(job_id.to_string()));
        }
    }

    // The destroyer must run on any submit failure, not just a `false`
    // return.
    let accepted = match ctx.submission_engine.submit(&mut request).await {
        Ok(accepted) => accepted,
        Err(err) => {
            warn!(%job_id, error = %err, "submit call raised an error; running destroyer");
            false
        }
    };

    if !accepted {
        if let Some(callbacks) = &request.callbacks {
            let context = ConnectorContext::new(request.connector_id.clone(), job_id.clone());
            if let Err(err) = callbacks.destroyer.run(&context).await {
                warn!(%job_id, error = %err, "destroyer failed during submit rollback");
            }
        }
        request.summary.status = xfer_core::SubmissionStatus::FailureOnSubmit;
    }

    let persisted = ctx.repository.create_submission(request.summary).await?;
    if accepted {
        info!(%job_id, external_id = ?persisted.external_id, status = %persisted.status, "submission accepted");
    } else {
        warn!(%job_id, "submission rejected on submit");
    }
    Ok(persisted)
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;

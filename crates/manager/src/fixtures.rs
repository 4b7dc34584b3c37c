// SPDX-License-Identifier: MIT

//! Shared test harness for the coordinator/lifecycle/worker test modules.

use std::collections::HashMap;
use std::sync::Arc;

use xfer_connector::fixtures::{reference_connector, RecordingDestroyer, RecordingInitializer};
use xfer_connector::InMemoryConnectorRegistry;
use xfer_core::{FieldDescriptor, FieldKind, FakeClock, FormSchema, JobType, MapConfig, MConnection, MFramework, MJob};
use xfer_engine::fixtures::{InMemoryExecutionEngine, InMemorySubmissionEngine};
use xfer_engine::EngineRegistry;
use xfer_storage::MemRepository;

use crate::lifecycle::{SubmissionManager, EXECUTION_ENGINE_KEY, SUBMISSION_ENGINE_KEY};

pub(crate) const ENGINE_KIND: &str = "in-memory";
pub(crate) const CONNECTOR_ID: &str = "connector-1";
pub(crate) const JOB_ID: &str = "job-17";
pub(crate) const CONNECTION_ID: &str = "conn-1";

/// Everything a coordinator/lifecycle test needs: a manager wired to fake
/// in-memory engines and a seeded job+connection, plus handles to the
/// fakes so tests can drive and assert on them.
pub(crate) struct Harness {
    pub manager: SubmissionManager<FakeClock>,
    pub repository: Arc<MemRepository>,
    pub submission_engine: Arc<InMemorySubmissionEngine>,
    pub initializer: Arc<RecordingInitializer>,
    pub destroyer: Arc<RecordingDestroyer>,
    pub clock: FakeClock,
}

pub(crate) fn framework_schema() -> MFramework {
    let mut job_forms = HashMap::new();
    job_forms.insert(
        JobType::Import,
        FormSchema::new(vec![FieldDescriptor::new("output_directory", FieldKind::Text, false)]),
    );
    job_forms.insert(JobType::Export, FormSchema::default());
    MFramework::new(FormSchema::default(), job_forms)
}

pub(crate) async fn harness() -> Harness {
    let repository = Arc::new(MemRepository::new());
    let (connector, initializer, destroyer) = reference_connector(CONNECTOR_ID);
    let connector_registry = InMemoryConnectorRegistry::shared();
    connector_registry.register(connector);

    let job = MJob::new(JOB_ID, "nightly-import", JobType::Import, CONNECTOR_ID, CONNECTION_ID);
    let connection = MConnection::new(CONNECTION_ID, "test-connection", CONNECTOR_ID);
    repository.seed_job(job, connection);

    let submission_engine = InMemorySubmissionEngine::shared(ENGINE_KIND);
    let execution_engine = InMemoryExecutionEngine::shared(ENGINE_KIND);

    let engine_registry = EngineRegistry::shared();
    {
        let submission_engine = submission_engine.clone();
        engine_registry.register_submission_engine(SUBMISSION_ENGINE_KEY, move || submission_engine.clone());
    }
    {
        let execution_engine = execution_engine.clone();
        engine_registry.register_execution_engine(EXECUTION_ENGINE_KEY, move || execution_engine.clone());
    }

    let config = Arc::new(
        MapConfig::new().set(SUBMISSION_ENGINE_KEY, ENGINE_KIND).set(EXECUTION_ENGINE_KEY, ENGINE_KIND),
    );

    let clock = FakeClock::new();
    let manager = SubmissionManager::new(
        repository.clone(),
        connector_registry,
        engine_registry,
        config,
        clock.clone(),
    );
    manager.initialize(framework_schema()).await.unwrap();

    Harness { manager, repository, submission_engine, initializer, destroyer, clock }
}

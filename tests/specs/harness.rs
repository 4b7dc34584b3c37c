//! Shared black-box setup for the root integration specs: wires a
//! `SubmissionManager` against the in-memory reference engines, connector,
//! and repository using only public API, the way an embedding daemon
//! would.

use std::sync::Arc;

use xfer_connector::fixtures::reference_connector;
use xfer_connector::InMemoryConnectorRegistry;
use xfer_core::{
    FakeClock, FieldDescriptor, FieldKind, FormSchema, JobType, MapConfig, MConnection, MFramework, MJob,
};
use xfer_engine::fixtures::{InMemoryExecutionEngine, InMemorySubmissionEngine};
use xfer_engine::EngineRegistry;
use xfer_manager::{SubmissionManager, EXECUTION_ENGINE_KEY, SUBMISSION_ENGINE_KEY};
use xfer_storage::MemRepository;

pub const ENGINE_KIND: &str = "in-memory";
pub const CONNECTOR_ID: &str = "connector-1";
pub const CONNECTION_ID: &str = "conn-1";

pub struct Harness {
    pub manager: SubmissionManager<FakeClock>,
    pub repository: Arc<MemRepository>,
    pub submission_engine: Arc<InMemorySubmissionEngine>,
    pub clock: FakeClock,
}

pub fn framework_schema() -> MFramework {
    let mut job_forms = std::collections::HashMap::new();
    job_forms.insert(
        JobType::Import,
        FormSchema::new(vec![FieldDescriptor::new("output_directory", FieldKind::Text, false)]),
    );
    job_forms.insert(JobType::Export, FormSchema::default());
    MFramework::new(FormSchema::default(), job_forms)
}

/// Seeds `job_id` as an IMPORT job against a fresh connection+connector and
/// returns an initialized manager plus handles to drive the fake backend.
pub async fn harness_for(job_id: &str) -> Harness {
    let repository = Arc::new(MemRepository::new());
    let (connector, _initializer, _destroyer) = reference_connector(CONNECTOR_ID);
    let connector_registry = InMemoryConnectorRegistry::shared();
    connector_registry.register(connector);

    let job = MJob::new(job_id, "nightly-import", JobType::Import, CONNECTOR_ID, CONNECTION_ID);
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

    // Fast update/purge ticks so integration tests can observe the real
    // background workers within a test timeout instead of waiting out the
    // 5-minute/24-hour production defaults.
    let config = Arc::new(
        MapConfig::new()
            .set(SUBMISSION_ENGINE_KEY, ENGINE_KIND)
            .set(EXECUTION_ENGINE_KEY, ENGINE_KIND)
            .set("submission.update.sleep_ms", "20")
            .set("submission.purge.sleep_ms", "20"),
    );

    let clock = FakeClock::new();
    let manager =
        SubmissionManager::new(repository.clone(), connector_registry, engine_registry, config, clock.clone());
    manager.initialize(framework_schema()).await.unwrap();

    Harness { manager, repository, submission_engine, clock }
}

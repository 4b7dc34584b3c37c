use super::*;
use crate::fixtures::{InMemoryExecutionEngine, InMemorySubmissionEngine};

#[test]
fn builds_registered_submission_engine_by_name() {
    let registry = EngineRegistry::new();
    registry.register_submission_engine("in-memory", || InMemorySubmissionEngine::shared("in-memory"));

    assert!(registry.build_submission_engine("in-memory").is_some());
    assert!(registry.build_submission_engine("unknown").is_none());
}

#[test]
fn builds_registered_execution_engine_by_name() {
    let registry = EngineRegistry::new();
    registry.register_execution_engine("in-memory", || InMemoryExecutionEngine::shared("in-memory"));

    assert!(registry.build_execution_engine("in-memory").is_some());
    assert!(registry.build_execution_engine("unknown").is_none());
}

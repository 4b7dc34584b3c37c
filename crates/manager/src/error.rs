// SPDX-License-Identifier: MIT

//! The `FRAMEWORK_000x` error taxonomy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("submission engine class not instantiable: {0}")]
    SubmissionEngineNotInstantiable(String),
    #[error("job {0} already has a running submission")]
    AlreadyRunning(String),
    #[error("stop requested on non-running submission for job {0}")]
    StopOnNonRunning(String),
    #[error("unknown job id: {0}")]
    UnknownJob(String),
    #[error("unsupported job type for job {0}")]
    UnsupportedJobType(String),
    #[error("callback instance not instantiable: {0}")]
    CallbackNotInstantiable(String),
    #[error("execution engine class not instantiable: {0}")]
    ExecutionEngineNotInstantiable(String),
    #[error("incompatible submission-engine / execution-engine pair")]
    IncompatibleEnginePair,

    /// Ambient failure surfaces not covered by the fixed 0001-0008 taxonomy:
    /// the repository, the form materializer, and the engines themselves can
    /// all fail mid-operation.
    #[error("repository error: {0}")]
    Repository(#[from] xfer_storage::RepositoryError),
    #[error("configuration materialization failed: {0}")]
    Materialize(#[from] xfer_connector::MaterializeError),
    #[error("engine call failed: {0}")]
    Engine(#[from] xfer_engine::EngineError),
    #[error("submission manager operation called before initialize() completed")]
    NotInitialized,
}

impl ManagerError {
    /// The stable code callers key error handling off of.
    pub fn code(&self) -> &'static str {
        match self {
            Self::SubmissionEngineNotInstantiable(_) => "FRAMEWORK_0001",
            Self::AlreadyRunning(_) => "FRAMEWORK_0002",
            Self::StopOnNonRunning(_) => "FRAMEWORK_0003",
            Self::UnknownJob(_) => "FRAMEWORK_0004",
            Self::UnsupportedJobType(_) => "FRAMEWORK_0005",
            Self::CallbackNotInstantiable(_) => "FRAMEWORK_0006",
            Self::ExecutionEngineNotInstantiable(_) => "FRAMEWORK_0007",
            Self::IncompatibleEnginePair => "FRAMEWORK_0008",
            Self::Repository(_) => "FRAMEWORK_STORAGE",
            Self::Materialize(_) => "FRAMEWORK_MATERIALIZE",
            Self::Engine(_) => "FRAMEWORK_ENGINE",
            Self::NotInitialized => "FRAMEWORK_NOT_INITIALIZED",
        }
    }
}

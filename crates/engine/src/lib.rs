// SPDX-License-Identifier: MIT

//! xfer-engine: the submission/execution engine SPIs and the ephemeral
//! `SubmissionRequest` they're threaded through.

#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
mod execution_engine;
mod registry;
mod request;
mod submission_engine;

#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;

pub use error::EngineError;
pub use execution_engine::ExecutionEngine;
pub use registry::EngineRegistry;
pub use request::{MaterializedConfigs, SubmissionRequest};
pub use submission_engine::SubmissionEngine;

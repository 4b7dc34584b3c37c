// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised by submission/execution engine implementations. `xfer-manager`
/// maps these onto its own `FRAMEWORK_000x` taxonomy; this crate only needs
/// to distinguish init-time failures from per-call failures.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("engine initialization failed: {0}")]
    InitializationFailed(String),
    #[error("submission engine does not accept execution engine kind {0:?}")]
    Incompatible(&'static str),
    #[error("engine call failed: {0}")]
    CallFailed(String),
}

// SPDX-License-Identifier: MIT

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("connector {0} not found in registry")]
    NotFound(String),
    #[error("form materialization failed: {0}")]
    Materialize(#[from] crate::form::MaterializeError),
    #[error("initializer failed: {0}")]
    InitializerFailed(String),
    #[error("destroyer failed: {0}")]
    DestroyerFailed(String),
}

// SPDX-License-Identifier: MIT

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("framework metadata already registered")]
    FrameworkAlreadyRegistered,
    #[error("job {0} not found")]
    JobNotFound(String),
    #[error("connection {0} not found")]
    ConnectionNotFound(String),
    #[error("submission {0} not found")]
    SubmissionNotFound(u64),
}

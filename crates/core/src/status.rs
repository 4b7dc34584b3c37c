// SPDX-License-Identifier: MIT

//! The submission state machine.
//!
//! Transitions are dictated entirely by what the submission engine reports,
//! with exactly one local edge: `submit` failing, whether by returning
//! `false` or by raising an error, moves a brand new submission straight to
//! [`SubmissionStatus::FailureOnSubmit`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    /// Transient only: returned by `status()` when no submission row exists
    /// for the job. Never persisted.
    NeverExecuted,
    Booting,
    Running,
    Succeeded,
    Failed,
    FailureOnSubmit,
    /// The submission engine could not determine the current state; treated
    /// as non-terminal so the update worker keeps polling it.
    Unknown,
}

impl SubmissionStatus {
    /// A submission engine has accepted the job and it is actively
    /// executing on the remote cluster.
    pub fn is_running(self) -> bool {
        matches!(self, Self::Booting | Self::Running)
    }

    /// Terminal submissions are no longer polled by the update worker.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::FailureOnSubmit)
    }
}

crate::simple_display! {
    SubmissionStatus {
        NeverExecuted => "NEVER_EXECUTED",
        Booting => "BOOTING",
        Running => "RUNNING",
        Succeeded => "SUCCEEDED",
        Failed => "FAILED",
        FailureOnSubmit => "FAILURE_ON_SUBMIT",
        Unknown => "UNKNOWN",
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;

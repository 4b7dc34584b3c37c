// SPDX-License-Identifier: MIT

//! The two background workers owned by [`crate::lifecycle::SubmissionManager`]:
//! started in `initialize`, stopped in `destroy`.

pub(crate) mod purge_worker;
pub(crate) mod update_worker;

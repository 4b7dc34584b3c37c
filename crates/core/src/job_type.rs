// SPDX-License-Identifier: MIT

//! The two job kinds a job definition can carry.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobType {
    Import,
    Export,
}

crate::simple_display! {
    JobType {
        Import => "IMPORT",
        Export => "EXPORT",
    }
}

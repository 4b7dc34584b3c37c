// SPDX-License-Identifier: MIT

//! `MFramework`: the static schema object describing the connection form
//! and the per-job-type forms.
//!
//! Built once at process start from the fixed configuration classes, then
//! registered with the repository; the returned, id-bearing value replaces
//! the in-memory one and is read-only thereafter.

use crate::form::FormSchema;
use crate::ids::FrameworkId;
use crate::job_type::JobType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MFramework {
    /// `None` until `Repository::register_framework` assigns one.
    pub id: Option<FrameworkId>,
    pub connection_form: FormSchema,
    pub job_forms: HashMap<JobType, FormSchema>,
}

impl MFramework {
    pub fn new(connection_form: FormSchema, job_forms: HashMap<JobType, FormSchema>) -> Self {
        Self { id: None, connection_form, job_forms }
    }

    /// True once this value has been through `register_framework`.
    pub fn is_registered(&self) -> bool {
        self.id.is_some()
    }

    pub fn job_form(&self, job_type: JobType) -> Option<&FormSchema> {
        self.job_forms.get(&job_type)
    }
}

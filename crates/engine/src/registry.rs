// SPDX-License-Identifier: MIT

//! Name-to-factory plugin tables for submission/execution engines.
//!
//! Engines register a constructor function under a name at build time, and
//! the manager looks the name up at init instead of instantiating a class
//! by reflection.

use crate::execution_engine::ExecutionEngine;
use crate::submission_engine::SubmissionEngine;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

type SubmissionEngineFactory = Arc<dyn Fn() -> Arc<dyn SubmissionEngine> + Send + Sync>;
type ExecutionEngineFactory = Arc<dyn Fn() -> Arc<dyn ExecutionEngine> + Send + Sync>;

/// Resolves an engine by its configured name.
#[derive(Default)]
pub struct EngineRegistry {
    submission_engines: RwLock<HashMap<String, SubmissionEngineFactory>>,
    execution_engines: RwLock<HashMap<String, ExecutionEngineFactory>>,
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn register_submission_engine<F>(&self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Arc<dyn SubmissionEngine> + Send + Sync + 'static,
    {
        self.submission_engines.write().insert(name.into(), Arc::new(factory));
    }

    pub fn register_execution_engine<F>(&self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Arc<dyn ExecutionEngine> + Send + Sync + 'static,
    {
        self.execution_engines.write().insert(name.into(), Arc::new(factory));
    }

    /// `None` on an unknown name — the manager maps this onto `FRAMEWORK_0001`.
    pub fn build_submission_engine(&self, name: &str) -> Option<Arc<dyn SubmissionEngine>> {
        self.submission_engines.read().get(name).map(|factory| factory())
    }

    /// `None` on an unknown name — the manager maps this onto `FRAMEWORK_0007`.
    pub fn build_execution_engine(&self, name: &str) -> Option<Arc<dyn ExecutionEngine>> {
        self.execution_engines.read().get(name).map(|factory| factory())
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

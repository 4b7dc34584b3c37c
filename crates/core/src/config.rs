// SPDX-License-Identifier: MIT

//! Abstraction over the system configuration source.
//!
//! Both engine initialization (`initialize(context, prefix)`) and the
//! manager's own numeric keys (purge threshold/sleep, update sleep) read
//! through this trait, so a concrete config backend never has to be named
//! by the crates that merely consume it.

use std::collections::HashMap;
use std::sync::Arc;

/// Read-only key/value configuration source.
pub trait ConfigSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key)?.parse().ok()
    }

    /// A view scoped to `prefix.` — used for per-engine config subtrees.
    fn scoped(self: Arc<Self>, prefix: &str) -> ScopedConfig
    where
        Self: Sized + 'static,
    {
        ScopedConfig { inner: self, prefix: prefix.to_string() }
    }
}

/// In-memory configuration source, the reference implementation used by
/// tests and by embedders that don't have a richer config system.
#[derive(Debug, Clone, Default)]
pub struct MapConfig(pub HashMap<String, String>);

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl ConfigSource for MapConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// A `ConfigSource` narrowed to keys under a dotted prefix.
pub struct ScopedConfig {
    inner: Arc<dyn ConfigSource>,
    prefix: String,
}

impl ConfigSource for ScopedConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(&format!("{}.{}", self.prefix, key))
    }
}

//! In-memory Resource Store
//!
//! Used for dry runs and tests. Writes to selected paths can be made to
//! fail to exercise per-service failure isolation.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::ports::resource_store::{ResourceError, ResourceResult, ResourceStore};
use crate::domain::value_objects::QualifiedName;

#[derive(Debug, Default)]
struct MemoryState {
    resources: BTreeMap<String, String>,
    originating: BTreeMap<String, Vec<QualifiedName>>,
    sources: BTreeMap<QualifiedName, String>,
    failing: BTreeSet<String>,
    failing_once: BTreeMap<String, usize>,
    source_writes: usize,
}

impl MemoryState {
    /// Fail a create or overwrite of `key` if a failure is injected for it.
    fn injected(&mut self, key: &str) -> ResourceResult<()> {
        if self.failing.contains(key) {
            return Err(injected_failure(key));
        }
        if let Some(remaining) = self.failing_once.get_mut(key) {
            *remaining -= 1;
            if *remaining == 0 {
                self.failing_once.remove(key);
            }
            return Err(injected_failure(key));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryResourceStore {
    state: Mutex<MemoryState>,
}

impl MemoryResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a pre-existing resource
    pub fn with_resource(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.lock().resources.insert(path.into(), content.into());
        self
    }

    /// Make every write to `key` (a resource path or artifact qualified name) fail,
    /// deletes included
    pub fn failing_on(self, key: impl Into<String>) -> Self {
        self.lock().failing.insert(key.into());
        self
    }

    /// Make the next create or overwrite of `key` fail; repeat to fail more.
    pub fn failing_once_on(self, key: impl Into<String>) -> Self {
        *self.lock().failing_once.entry(key.into()).or_insert(0) += 1;
        self
    }

    pub fn resource(&self, path: &str) -> Option<String> {
        self.lock().resources.get(path).cloned()
    }

    pub fn resources(&self) -> BTreeMap<String, String> {
        self.lock().resources.clone()
    }

    /// Originating types recorded by the last `create_resource` at `path`
    pub fn originating(&self, path: &str) -> Vec<QualifiedName> {
        self.lock()
            .originating
            .get(path)
            .cloned()
            .unwrap_or_default()
    }

    pub fn source(&self, name: &QualifiedName) -> Option<String> {
        self.lock().sources.get(name).cloned()
    }

    pub fn sources(&self) -> BTreeMap<QualifiedName, String> {
        self.lock().sources.clone()
    }

    /// Total number of successful source creates and overwrites
    pub fn source_writes(&self) -> usize {
        self.lock().source_writes
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn injected_failure(key: &str) -> ResourceError {
    ResourceError::Io {
        path: key.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "injected failure"),
    }
}

impl ResourceStore for MemoryResourceStore {
    fn open_existing(&self, path: &str) -> ResourceResult<String> {
        self.lock()
            .resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn delete(&self, path: &str) -> ResourceResult<()> {
        let mut state = self.lock();
        if state.failing.contains(path) {
            return Err(injected_failure(path));
        }
        state.originating.remove(path);
        state
            .resources
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn create_resource(
        &self,
        path: &str,
        originating: &[QualifiedName],
        content: &str,
    ) -> ResourceResult<()> {
        let mut state = self.lock();
        state.injected(path)?;
        if state.resources.contains_key(path) {
            return Err(ResourceError::AlreadyExists(path.to_string()));
        }
        state
            .resources
            .insert(path.to_string(), content.to_string());
        state
            .originating
            .insert(path.to_string(), originating.to_vec());
        Ok(())
    }

    fn source_artifact_exists(&self, name: &QualifiedName) -> bool {
        self.lock().sources.contains_key(name)
    }

    fn overwrite_source_artifact(
        &self,
        name: &QualifiedName,
        content: &str,
    ) -> ResourceResult<()> {
        let mut state = self.lock();
        let key = name.to_string();
        state.injected(&key)?;
        match state.sources.get_mut(name) {
            Some(existing) => {
                *existing = content.to_string();
                state.source_writes += 1;
                Ok(())
            }
            None => Err(ResourceError::NotFound(key)),
        }
    }

    fn create_source_artifact(
        &self,
        name: &QualifiedName,
        _originating: &QualifiedName,
        content: &str,
    ) -> ResourceResult<()> {
        let mut state = self.lock();
        let key = name.to_string();
        state.injected(&key)?;
        if state.sources.contains_key(name) {
            return Err(ResourceError::AlreadyExists(key));
        }
        state.sources.insert(name.clone(), content.to_string());
        state.source_writes += 1;
        Ok(())
    }
}

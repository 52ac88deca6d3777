//! ServiceMap entity - service name to implementations
//!
//! Pure data: built once per session by the service map builder, then
//! consumed by the registry writer and registration generator.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::value_objects::QualifiedName;

/// Mapping from fully-qualified service name to its implementations.
///
/// Implementation sets are deduplicated by qualified name and iterate in a
/// stable order, which keeps generated output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceMap {
    entries: BTreeMap<String, BTreeSet<QualifiedName>>,
}

impl ServiceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `implementation` under `service`.
    ///
    /// Returns false if the pair was already present.
    pub fn insert(&mut self, service: impl Into<String>, implementation: QualifiedName) -> bool {
        self.entries
            .entry(service.into())
            .or_default()
            .insert(implementation)
    }

    pub fn get(&self, service: &str) -> Option<&BTreeSet<QualifiedName>> {
        self.entries.get(service)
    }

    pub fn contains(&self, service: &str, implementation: &QualifiedName) -> bool {
        self.entries
            .get(service)
            .is_some_and(|impls| impls.contains(implementation))
    }

    /// Number of services
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn services(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &BTreeSet<QualifiedName>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Service keys in processing order: every key except `deferred` in
    /// sorted order, then `deferred` last if present.
    pub fn processing_order(&self, deferred: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .entries
            .keys()
            .filter(|k| k.as_str() != deferred)
            .cloned()
            .collect();
        if self.entries.contains_key(deferred) {
            keys.push(deferred.to_string());
        }
        keys
    }
}

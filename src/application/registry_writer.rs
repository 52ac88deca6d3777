//! Registry writer
//!
//! Rewrites the discovery manifest of one service: read what is there,
//! delete it, create it again with old lines first and new names appended.
//! Resources cannot be reopened for writing, hence delete-then-create.
//! If the create fails after the delete, the previous lines are written
//! back so a failed session never loses entries from earlier builds.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::entities::{manifest_path, Manifest};
use crate::domain::ports::{DiagnosticSink, ResourceResult, ResourceStore};
use crate::domain::value_objects::QualifiedName;

/// What one manifest write did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestWrite {
    pub service: String,
    pub path: String,
    /// Lines carried over from the previous manifest
    pub preserved: usize,
    /// Implementations appended by this write
    pub added: usize,
}

pub struct RegistryWriter<'a> {
    store: &'a dyn ResourceStore,
    sink: &'a dyn DiagnosticSink,
    root: &'a str,
}

impl<'a> RegistryWriter<'a> {
    pub fn new(store: &'a dyn ResourceStore, sink: &'a dyn DiagnosticSink, root: &'a str) -> Self {
        Self { store, sink, root }
    }

    /// Merge `implementations` into the manifest of `service`.
    pub fn write(
        &self,
        service: &str,
        implementations: &BTreeSet<QualifiedName>,
    ) -> ResourceResult<ManifestWrite> {
        let path = manifest_path(self.root, service);

        let (mut manifest, previous) = match self.store.open_existing(&path) {
            Ok(content) => {
                let manifest = Manifest::from_existing(&content);
                self.store.delete(&path)?;
                let previous = manifest.clone();
                (manifest, Some(previous))
            }
            Err(e) if e.is_not_found() => {
                self.sink.note(format!("{} does not yet exist", path));
                (Manifest::new(), None)
            }
            Err(e) => return Err(e),
        };

        for implementation in implementations {
            if !manifest.contains(&implementation.to_string()) {
                self.sink.note(format!(
                    "registering {} as an implementation of {}",
                    implementation, service
                ));
            }
        }
        let added = manifest.add_all(implementations.iter().map(|i| i.to_string()));

        let originating: Vec<QualifiedName> = implementations.iter().cloned().collect();
        if let Err(e) = self
            .store
            .create_resource(&path, &originating, &manifest.render())
        {
            if let Some(previous) = previous {
                self.restore(&path, &previous);
            }
            return Err(e);
        }

        tracing::debug!(service, path = %path, added, "manifest written");
        Ok(ManifestWrite {
            service: service.to_string(),
            path,
            preserved: manifest.preserved(),
            added,
        })
    }

    /// Put the pre-session lines back after a failed rewrite.
    fn restore(&self, path: &str, previous: &Manifest) {
        match self.store.create_resource(path, &[], &previous.render()) {
            Ok(()) => self.sink.note(format!(
                "restored {} previous entries of {}",
                previous.lines().len(),
                path
            )),
            Err(e) => self.sink.warning(format!(
                "could not restore {} after a failed write, previous entries lost ({}): {}",
                path,
                previous.lines().join(", "),
                e
            )),
        }
    }
}

//! Process Report
//!
//! Outcome of the terminal pass, serializable for `--json` output.

use serde::Serialize;

use crate::application::registration_generator::ArtifactWrite;
use crate::application::registry_writer::ManifestWrite;

/// Which step a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStage {
    Manifest,
    Registration,
}

/// A per-service or per-pair failure that was reported and skipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub stage: FailureStage,
    pub service: String,
    /// Implementation, for registration failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,
    pub message: String,
}

/// Result of a finalized session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessReport {
    /// Services in the finalized service map
    pub services: usize,
    pub manifests: Vec<ManifestWrite>,
    pub artifacts: Vec<ArtifactWrite>,
    pub failures: Vec<Failure>,
}

impl ProcessReport {
    pub fn new(services: usize) -> Self {
        Self {
            services,
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn manifest(&self, service: &str) -> Option<&ManifestWrite> {
        self.manifests.iter().find(|m| m.service == service)
    }

    /// One-line summary for terminal output
    pub fn summary(&self) -> String {
        format!(
            "{} services, {} manifests, {} registrations, {} failures",
            self.services,
            self.manifests.len(),
            self.artifacts.len(),
            self.failures.len()
        )
    }
}

//! Registration generator
//!
//! Writes one adapter source per (service, implementation) pair. The
//! artifact name depends only on the pair, so a rebuild overwrites the
//! previous artifact in place instead of adding a second one.

use serde::Serialize;

use crate::domain::entities::{GeneratedRegistration, RegistrationTemplate};
use crate::domain::ports::ResourceStore;
use crate::domain::value_objects::QualifiedName;
use crate::error::WireupResult;

/// What one adapter write did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactWrite {
    pub service: String,
    pub implementation: QualifiedName,
    pub artifact: QualifiedName,
    /// An earlier artifact was replaced
    pub overwritten: bool,
}

pub struct RegistrationGenerator<'a> {
    store: &'a dyn ResourceStore,
    template: &'a RegistrationTemplate,
    suffix: &'a str,
}

impl<'a> RegistrationGenerator<'a> {
    pub fn new(
        store: &'a dyn ResourceStore,
        template: &'a RegistrationTemplate,
        suffix: &'a str,
    ) -> Self {
        Self {
            store,
            template,
            suffix,
        }
    }

    pub fn generate(
        &self,
        service: &str,
        implementation: &QualifiedName,
    ) -> WireupResult<ArtifactWrite> {
        let registration =
            GeneratedRegistration::new(service, implementation.clone(), self.suffix)?;
        let artifact = registration.artifact();
        let source = self.template.render(&registration);

        let overwritten = self.store.source_artifact_exists(artifact);
        if overwritten {
            self.store.overwrite_source_artifact(artifact, &source)?;
        } else {
            self.store
                .create_source_artifact(artifact, implementation, &source)?;
        }

        tracing::debug!(%artifact, overwritten, "registration generated");
        Ok(ArtifactWrite {
            service: service.to_string(),
            implementation: implementation.clone(),
            artifact: artifact.clone(),
            overwritten,
        })
    }
}

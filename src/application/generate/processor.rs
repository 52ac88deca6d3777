//! Registry Processor
//!
//! Host entry point, called once per pass:
//! 1. Accumulate annotated types into the session
//! 2. Report how many services are known so far
//! 3. On the terminal pass, build the service map and for every ordinary
//!    service write its manifest and generate its adapters
//! 4. Write the registration meta-service manifest last
//!
//! Failures for one service or one pair become diagnostics and entries in
//! the report; they never stop the remaining work.

use std::sync::Arc;

use crate::application::registration_generator::RegistrationGenerator;
use crate::application::registry_writer::RegistryWriter;
use crate::application::session::Session;
use crate::domain::entities::{RegistrationTemplate, ServiceMap};
use crate::domain::ports::{DiagnosticSink, NoopSink, ResourceStore, TypeCatalog};
use crate::error::WireupResult;

use super::options::GenerateOptions;
use super::report::{Failure, FailureStage, ProcessReport};

pub struct RegistryProcessor<S>
where
    S: ResourceStore,
{
    store: S,
    options: GenerateOptions,
    template: RegistrationTemplate,
    sink: Arc<dyn DiagnosticSink>,
    session: Session,
}

impl<S> RegistryProcessor<S>
where
    S: ResourceStore,
{
    pub fn new(store: S, options: GenerateOptions, template: RegistrationTemplate) -> Self {
        let session = Session::new(options.trigger.clone());
        Self {
            store,
            options,
            template,
            sink: Arc::new(NoopSink),
            session,
        }
    }

    /// Report diagnostics to `sink` instead of discarding them
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the processor, handing back the store
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Process one pass. Returns the report on the terminal pass only.
    ///
    /// Errors only when the session was already finalized.
    pub fn process(
        &mut self,
        catalog: &dyn TypeCatalog,
        terminal: bool,
    ) -> WireupResult<Option<ProcessReport>> {
        let sink = self.sink.as_ref();
        let added = self.session.accumulate(catalog, sink)?;
        tracing::debug!(
            added,
            accumulated = self.session.len(),
            terminal,
            "pass accumulated"
        );

        if !terminal {
            let found = self.session.preview(catalog).len();
            sink.note(format!("Found {} services", found));
            return Ok(None);
        }

        let map = self.session.finalize(catalog)?;
        sink.note(format!("Found {} services", map.len()));
        Ok(Some(self.write_outputs(&map)))
    }

    fn write_outputs(&self, map: &ServiceMap) -> ProcessReport {
        let sink = self.sink.as_ref();
        let meta = self.options.registration_service.as_str();
        let writer = RegistryWriter::new(&self.store, sink, &self.options.discovery_root);
        let generator = RegistrationGenerator::new(&self.store, &self.template, &self.options.suffix);

        let mut report = ProcessReport::new(map.len());
        let mut registrations = ServiceMap::new();
        if let Some(declared) = map.get(meta) {
            for implementation in declared {
                registrations.insert(meta, implementation.clone());
            }
        }

        for service in map.processing_order(meta) {
            if service == meta {
                continue;
            }
            let Some(implementations) = map.get(&service) else {
                continue;
            };

            match writer.write(&service, implementations) {
                Ok(write) => report.manifests.push(write),
                Err(e) => {
                    sink.note(format!("failed to write manifest for {}: {}", service, e));
                    report.failures.push(Failure {
                        stage: FailureStage::Manifest,
                        service: service.clone(),
                        implementation: None,
                        message: e.to_string(),
                    });
                }
            }

            for implementation in implementations {
                match generator.generate(&service, implementation) {
                    Ok(write) => {
                        registrations.insert(meta, write.artifact.clone());
                        report.artifacts.push(write);
                    }
                    Err(e) => {
                        sink.note(format!(
                            "failed to generate registration (service {}, implementation {}): {}",
                            service, implementation, e
                        ));
                        report.failures.push(Failure {
                            stage: FailureStage::Registration,
                            service: service.clone(),
                            implementation: Some(implementation.to_string()),
                            message: e.to_string(),
                        });
                    }
                }
            }
        }

        if let Some(adapters) = registrations.get(meta) {
            match writer.write(meta, adapters) {
                Ok(write) => report.manifests.push(write),
                Err(e) => {
                    sink.note(format!("failed to write manifest for {}: {}", meta, e));
                    report.failures.push(Failure {
                        stage: FailureStage::Manifest,
                        service: meta.to_string(),
                        implementation: None,
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::debug!(summary = %report.summary(), "session finalized");
        report
    }
}

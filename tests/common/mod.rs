//! Common test utilities for wireup contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus CLI execution helpers
//! - `run_passes`: Drive a processor through every pass of a catalog
//! - Fixtures: Reusable catalog content

#![allow(dead_code)]

pub mod fixtures;

pub use env::*;
pub use fixtures::*;

use std::path::Path;
use std::sync::Arc;

use wireup::application::{GenerateOptions, ProcessReport, RegistryProcessor};
use wireup::domain::entities::{RegistrationTemplate, DEFAULT_TEMPLATE};
use wireup::domain::ports::ResourceStore;
use wireup::infrastructure::{CollectingSink, LocalResourceStore, TomlCatalog};
use wireup::QualifiedName;

pub fn qn(s: &str) -> QualifiedName {
    QualifiedName::parse(s).unwrap()
}

pub fn catalog(content: &str) -> TomlCatalog {
    TomlCatalog::parse(content, Path::new("catalog.toml")).unwrap()
}

/// Processor with default options, the built-in template and a collecting sink
pub fn processor<S: ResourceStore>(store: S) -> (RegistryProcessor<S>, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    let processor = RegistryProcessor::new(
        store,
        GenerateOptions::new(qn("wireup.Wire")),
        RegistrationTemplate::new(DEFAULT_TEMPLATE).unwrap(),
    )
    .with_sink(sink.clone());
    (processor, sink)
}

/// Feed every pass of `catalog` to `processor`; the last one is terminal.
pub fn run_passes<S: ResourceStore>(
    processor: &mut RegistryProcessor<S>,
    catalog: &TomlCatalog,
) -> ProcessReport {
    let last = catalog.last_pass();
    for n in 0..last {
        assert!(processor.process(&catalog.pass(n), false).unwrap().is_none());
    }
    processor
        .process(&catalog.pass(last), true)
        .unwrap()
        .expect("terminal pass returns a report")
}

/// One complete build session against an on-disk store
pub fn build_once(root: &Path, content: &str) -> (ProcessReport, Arc<CollectingSink>) {
    let store = LocalResourceStore::new(root.join("classes"), root.join("generated"));
    let (mut processor, sink) = processor(store);
    let report = run_passes(&mut processor, &catalog(content));
    (report, sink)
}

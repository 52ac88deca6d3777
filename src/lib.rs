//! wireup - build-time service registry generator
//!
//! Finds types marked with a trigger attribute (directly, or through
//! attributes that are themselves marked with it), groups them by the
//! services they implement, and writes one discovery manifest per service
//! plus a reflection-free registration adapter per (service, implementation)
//! pair. The host build platform is reached only through the ports in
//! [`domain::ports`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{GenerateOptions, ProcessReport, RegistryProcessor, Session};
pub use config::Config;
pub use domain::entities::{DeclaredType, ServiceMap};
pub use domain::ports::{Diagnostic, DiagnosticSink, ResourceStore, Severity, TypeCatalog};
pub use domain::value_objects::QualifiedName;
pub use error::{WireupError, WireupResult};
pub use infrastructure::{LocalResourceStore, MemoryResourceStore, TomlCatalog};

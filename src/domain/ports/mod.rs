//! Domain Ports (Interfaces)
//!
//! These traits define the boundary with the host build platform.
//! Infrastructure layer provides concrete implementations.

pub mod diagnostics;
pub mod resource_store;
pub mod type_catalog;

pub use diagnostics::{Diagnostic, DiagnosticSink, NoopSink, Severity};
pub use resource_store::{ResourceError, ResourceResult, ResourceStore};
pub use type_catalog::TypeCatalog;

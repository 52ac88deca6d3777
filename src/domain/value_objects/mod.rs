//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod element_kind;
mod qualified_name;

pub use config_warning::ConfigWarning;
pub use element_kind::{AttributeMeta, ElementKind, ElementTarget, Retention};
pub use qualified_name::{simple_name_of, QualifiedName};

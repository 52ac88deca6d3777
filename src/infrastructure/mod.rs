//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `catalog/` - TOML catalog host (TypeCatalog)
//! - `fs/` - Resource stores (Local, Memory)
//! - `diagnostics/` - Diagnostic sinks (Tracing, Collecting)

pub mod catalog;
pub mod diagnostics;
pub mod fs;

// Re-export for convenience
pub use catalog::{CatalogError, CatalogPass, TomlCatalog};
pub use diagnostics::{CollectingSink, TracingSink};
pub use fs::{LocalResourceStore, MemoryResourceStore};

//! Catalog implementations of the TypeCatalog port

mod pass;
mod toml_catalog;

pub use pass::CatalogPass;
pub use toml_catalog::{CatalogError, TomlCatalog};

//! TypeCatalog port - the host's view of declared types for one pass
//!
//! The host may reveal new types in later passes, so a catalog is a
//! snapshot of what is visible in the current pass only.

use crate::domain::entities::DeclaredType;
use crate::domain::value_objects::QualifiedName;

pub trait TypeCatalog {
    /// Declared types (of any kind) carrying `attribute` in this pass
    fn types_with_attribute(&self, attribute: &QualifiedName) -> Vec<DeclaredType>;

    /// Check whether the type named `ty` is annotated with `attribute`
    fn is_annotated_with(&self, ty: &QualifiedName, attribute: &QualifiedName) -> bool;

    /// Look up a fully resolvable type by its qualified name
    fn lookup(&self, name: &str) -> Option<DeclaredType>;
}

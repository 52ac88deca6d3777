//! In-memory catalog view for one pass
//!
//! Types first visible in this pass are "fresh"; enumeration only returns
//! those, while lookups see every type visible so far.

use std::collections::BTreeSet;

use crate::domain::entities::DeclaredType;
use crate::domain::ports::TypeCatalog;
use crate::domain::value_objects::QualifiedName;

#[derive(Debug, Clone, Default)]
pub struct CatalogPass {
    visible: Vec<DeclaredType>,
    fresh: BTreeSet<QualifiedName>,
}

impl CatalogPass {
    /// A pass in which every given type is fresh
    pub fn new(types: Vec<DeclaredType>) -> Self {
        let fresh = types.iter().map(|t| t.name().clone()).collect();
        Self {
            visible: types,
            fresh,
        }
    }

    /// A pass revealing `fresh` on top of types seen in earlier passes
    pub fn with_earlier(fresh: Vec<DeclaredType>, earlier: Vec<DeclaredType>) -> Self {
        let fresh_names = fresh.iter().map(|t| t.name().clone()).collect();
        let mut visible = earlier;
        visible.extend(fresh);
        Self {
            visible,
            fresh: fresh_names,
        }
    }

    /// Number of types visible in this pass
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Number of types first visible in this pass
    pub fn fresh_count(&self) -> usize {
        self.fresh.len()
    }

    fn find(&self, name: &QualifiedName) -> Option<&DeclaredType> {
        self.visible.iter().find(|t| t.name() == name)
    }
}

impl TypeCatalog for CatalogPass {
    fn types_with_attribute(&self, attribute: &QualifiedName) -> Vec<DeclaredType> {
        self.visible
            .iter()
            .filter(|t| self.fresh.contains(t.name()) && t.has_attribute(attribute))
            .cloned()
            .collect()
    }

    fn is_annotated_with(&self, ty: &QualifiedName, attribute: &QualifiedName) -> bool {
        self.find(ty).is_some_and(|t| t.has_attribute(attribute))
    }

    fn lookup(&self, name: &str) -> Option<DeclaredType> {
        self.visible
            .iter()
            .find(|t| t.name().as_str() == name)
            .cloned()
    }
}

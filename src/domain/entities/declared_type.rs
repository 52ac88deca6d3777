//! DeclaredType entity - a type as the host catalog sees it
//!
//! A read-only snapshot: the pipeline never mutates declared types, it only
//! reads their identity, kind and attribute uses.

use crate::domain::value_objects::{AttributeMeta, ElementKind, QualifiedName};

/// One application of an attribute to a declared type.
///
/// `services` holds the explicit service references written in the
/// attribute's payload, exactly as the source wrote them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeUse {
    attribute: QualifiedName,
    services: Vec<String>,
}

impl AttributeUse {
    pub fn new(attribute: QualifiedName) -> Self {
        Self {
            attribute,
            services: Vec::new(),
        }
    }

    pub fn with_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services = services.into_iter().map(Into::into).collect();
        self
    }

    pub fn attribute(&self) -> &QualifiedName {
        &self.attribute
    }

    /// Raw service references from the payload
    pub fn services(&self) -> &[String] {
        &self.services
    }
}

/// A compilation-visible type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredType {
    name: QualifiedName,
    kind: ElementKind,
    attributes: Vec<AttributeUse>,
    /// Present only for attribute types
    attribute_meta: Option<AttributeMeta>,
}

impl DeclaredType {
    pub fn new(name: QualifiedName, kind: ElementKind) -> Self {
        Self {
            name,
            kind,
            attributes: Vec::new(),
            attribute_meta: None,
        }
    }

    /// Shorthand for a class declaration
    pub fn class(name: QualifiedName) -> Self {
        Self::new(name, ElementKind::Class)
    }

    /// Shorthand for an attribute type declaration with its applicability metadata
    pub fn attribute(name: QualifiedName, meta: AttributeMeta) -> Self {
        Self::new(name, ElementKind::Attribute).with_attribute_meta(meta)
    }

    pub fn with_attribute_use(mut self, attribute_use: AttributeUse) -> Self {
        self.attributes.push(attribute_use);
        self
    }

    pub fn with_attribute_meta(mut self, meta: AttributeMeta) -> Self {
        self.attribute_meta = Some(meta);
        self
    }

    pub fn name(&self) -> &QualifiedName {
        &self.name
    }

    pub fn package(&self) -> &str {
        self.name.package()
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn attributes(&self) -> &[AttributeUse] {
        &self.attributes
    }

    pub fn attribute_meta(&self) -> Option<&AttributeMeta> {
        self.attribute_meta.as_ref()
    }

    /// Every use of `attribute` on this type (several for repeatable attributes)
    pub fn uses_of<'a>(
        &'a self,
        attribute: &'a QualifiedName,
    ) -> impl Iterator<Item = &'a AttributeUse> + 'a {
        self.attributes
            .iter()
            .filter(move |u| u.attribute() == attribute)
    }

    /// Check whether this type directly carries `attribute`
    pub fn has_attribute(&self, attribute: &QualifiedName) -> bool {
        self.uses_of(attribute).next().is_some()
    }
}

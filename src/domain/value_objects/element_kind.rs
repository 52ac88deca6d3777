//! Element kinds and attribute applicability metadata

use serde::{Deserialize, Serialize};

/// Kind of a declared element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Concrete class: the only kind that can be registered
    #[default]
    Class,
    Interface,
    Enum,
    /// Attribute (annotation) type
    Attribute,
    /// Method, field or other non-type member
    Member,
}

impl ElementKind {
    /// Returns true if elements of this kind can be registered as implementations
    pub fn is_registrable(&self) -> bool {
        matches!(self, ElementKind::Class)
    }

    pub fn is_attribute(&self) -> bool {
        matches!(self, ElementKind::Attribute)
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ElementKind::Class => "class",
            ElementKind::Interface => "interface",
            ElementKind::Enum => "enum",
            ElementKind::Attribute => "attribute",
            ElementKind::Member => "member",
        };
        write!(f, "{}", s)
    }
}

/// How long an attribute stays visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Retention {
    /// Discarded after parsing
    Source,
    /// Recorded in build output but not visible at runtime
    #[default]
    Build,
    /// Visible at runtime
    Runtime,
}

/// Where an attribute may be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementTarget {
    Type,
    Method,
    Field,
    Parameter,
    Attribute,
}

/// Applicability metadata carried by attribute types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AttributeMeta {
    #[serde(default)]
    pub retention: Retention,
    #[serde(default)]
    pub targets: Vec<ElementTarget>,
}

impl AttributeMeta {
    pub fn new(retention: Retention, targets: Vec<ElementTarget>) -> Self {
        Self { retention, targets }
    }

    /// Metadata of a valid indirect trigger
    pub fn runtime_type_only() -> Self {
        Self::new(Retention::Runtime, vec![ElementTarget::Type])
    }

    /// Reason this attribute cannot act as an indirect trigger, if any.
    pub fn trigger_violation(&self) -> Option<&'static str> {
        if self.retention != Retention::Runtime {
            return Some("retention must be runtime");
        }
        if self.targets.is_empty() || self.targets.iter().any(|t| *t != ElementTarget::Type) {
            return Some("must target type declarations only");
        }
        None
    }
}

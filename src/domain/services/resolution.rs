//! Service payload resolution
//!
//! A trigger payload names service types. While compilation is still in
//! progress a referenced type may not be resolvable yet; in that case the
//! references are taken as written. Both outcomes feed the service map the
//! same way.

use crate::domain::ports::TypeCatalog;

/// Outcome of resolving one trigger payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceResolution {
    /// Every reference named a visible type; canonical names
    Resolved(Vec<String>),
    /// At least one reference is not resolvable yet; raw names
    Deferred(Vec<String>),
}

impl ServiceResolution {
    pub fn names(&self) -> &[String] {
        match self {
            ServiceResolution::Resolved(names) | ServiceResolution::Deferred(names) => names,
        }
    }

    pub fn into_names(self) -> Vec<String> {
        match self {
            ServiceResolution::Resolved(names) | ServiceResolution::Deferred(names) => names,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, ServiceResolution::Deferred(_))
    }
}

/// Resolve the raw service references of one payload against `catalog`.
pub fn resolve_payload(references: &[String], catalog: &dyn TypeCatalog) -> ServiceResolution {
    let references: Vec<&str> = references
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .collect();

    let mut resolved = Vec::with_capacity(references.len());
    for reference in &references {
        match catalog.lookup(reference) {
            Some(ty) => resolved.push(ty.name().to_string()),
            None => {
                return ServiceResolution::Deferred(
                    references.iter().map(|r| r.to_string()).collect(),
                )
            }
        }
    }
    ServiceResolution::Resolved(resolved)
}

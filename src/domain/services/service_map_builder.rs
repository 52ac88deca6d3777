//! Service map builder
//!
//! Turns the accumulated annotated types into `service -> implementations`.
//!
//! A type is registered under every service named by its trigger payloads.
//! It is also registered under its own name (self-registration) when the
//! payloads name no service, or when it carries any indirect trigger from
//! the closure, whether or not explicit services exist.

use std::collections::BTreeSet;

use crate::domain::entities::{DeclaredType, ServiceMap};
use crate::domain::ports::TypeCatalog;
use crate::domain::services::closure::TriggerClosure;
use crate::domain::services::resolution::resolve_payload;

pub struct ServiceMapBuilder<'a> {
    closure: &'a TriggerClosure,
    catalog: &'a dyn TypeCatalog,
}

impl<'a> ServiceMapBuilder<'a> {
    pub fn new(closure: &'a TriggerClosure, catalog: &'a dyn TypeCatalog) -> Self {
        Self { closure, catalog }
    }

    pub fn build<'t, I>(&self, types: I) -> ServiceMap
    where
        I: IntoIterator<Item = &'t DeclaredType>,
    {
        let mut map = ServiceMap::new();
        for ty in types {
            for service in self.services_for(ty) {
                map.insert(service, ty.name().clone());
            }
        }
        map
    }

    /// Effective service names of one type
    pub fn services_for(&self, ty: &DeclaredType) -> BTreeSet<String> {
        let mut services: BTreeSet<String> = ty
            .uses_of(self.closure.trigger())
            .flat_map(|u| resolve_payload(u.services(), self.catalog).into_names())
            .collect();

        let via_indirect = self.closure.indirect().any(|a| ty.has_attribute(a));
        if services.is_empty() || via_indirect {
            services.insert(ty.name().to_string());
        }
        services
    }
}

//! Build session
//!
//! A host reveals declared types over several passes. The session owns the
//! state that has to survive between them: the trigger closure (computed on
//! the first pass) and the set of annotated types seen so far. The set only
//! grows, and is handed to the service map builder once, on finalize.

use std::collections::BTreeMap;

use crate::domain::entities::{DeclaredType, ServiceMap};
use crate::domain::ports::{DiagnosticSink, TypeCatalog};
use crate::domain::services::{ClosureResolver, ServiceMapBuilder, TriggerClosure};
use crate::domain::value_objects::QualifiedName;
use crate::error::{WireupError, WireupResult};

#[derive(Debug, Clone)]
pub struct Session {
    trigger: QualifiedName,
    closure: Option<TriggerClosure>,
    annotated: BTreeMap<QualifiedName, DeclaredType>,
    finalized: bool,
}

impl Session {
    pub fn new(trigger: QualifiedName) -> Self {
        Self {
            trigger,
            closure: None,
            annotated: BTreeMap::new(),
            finalized: false,
        }
    }

    pub fn trigger(&self) -> &QualifiedName {
        &self.trigger
    }

    /// Closure computed by the first `accumulate`, if any
    pub fn closure(&self) -> Option<&TriggerClosure> {
        self.closure.as_ref()
    }

    /// Types accumulated so far, ordered by name
    pub fn annotated(&self) -> impl Iterator<Item = &DeclaredType> {
        self.annotated.values()
    }

    pub fn len(&self) -> usize {
        self.annotated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotated.is_empty()
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Add every class bearing a trigger-equivalent attribute in this pass.
    ///
    /// Returns the number of types not seen in earlier passes.
    pub fn accumulate(
        &mut self,
        catalog: &dyn TypeCatalog,
        sink: &dyn DiagnosticSink,
    ) -> WireupResult<usize> {
        if self.finalized {
            return Err(WireupError::SessionFinalized);
        }

        let trigger = &self.trigger;
        let closure = self
            .closure
            .get_or_insert_with(|| ClosureResolver::new(catalog, sink).resolve(trigger));

        let mut added = 0;
        for attribute in closure.members() {
            for ty in catalog.types_with_attribute(attribute) {
                if !ty.kind().is_registrable() || self.annotated.contains_key(ty.name()) {
                    continue;
                }
                tracing::trace!(ty = %ty.name(), via = %attribute, "accumulated");
                self.annotated.insert(ty.name().clone(), ty);
                added += 1;
            }
        }

        Ok(added)
    }

    /// Service map of the types accumulated so far, without finalizing
    pub fn preview(&self, catalog: &dyn TypeCatalog) -> ServiceMap {
        self.build(catalog)
    }

    /// Build the service map from everything accumulated. Only once per session.
    pub fn finalize(&mut self, catalog: &dyn TypeCatalog) -> WireupResult<ServiceMap> {
        if self.finalized {
            return Err(WireupError::SessionFinalized);
        }
        self.finalized = true;
        Ok(self.build(catalog))
    }

    fn build(&self, catalog: &dyn TypeCatalog) -> ServiceMap {
        let trivial;
        let closure = match &self.closure {
            Some(closure) => closure,
            None => {
                trivial = TriggerClosure::trivial(self.trigger.clone());
                &trivial
            }
        };
        ServiceMapBuilder::new(closure, catalog).build(self.annotated.values())
    }
}

//! Trigger closure
//!
//! Finds every attribute type that is marked, directly or transitively, by
//! the trigger attribute. Such attributes register the types they annotate
//! exactly like the trigger does.

use std::collections::{BTreeSet, VecDeque};

use crate::domain::entities::DeclaredType;
use crate::domain::ports::{DiagnosticSink, TypeCatalog};
use crate::domain::value_objects::QualifiedName;

/// The complete set of trigger-equivalent attributes, including the trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerClosure {
    trigger: QualifiedName,
    members: BTreeSet<QualifiedName>,
}

impl TriggerClosure {
    /// Closure containing only the trigger itself
    pub fn trivial(trigger: QualifiedName) -> Self {
        let members = BTreeSet::from([trigger.clone()]);
        Self { trigger, members }
    }

    pub fn trigger(&self) -> &QualifiedName {
        &self.trigger
    }

    pub fn contains(&self, attribute: &QualifiedName) -> bool {
        self.members.contains(attribute)
    }

    /// All members, trigger included, in stable order
    pub fn members(&self) -> impl Iterator<Item = &QualifiedName> {
        self.members.iter()
    }

    /// Members other than the trigger
    pub fn indirect(&self) -> impl Iterator<Item = &QualifiedName> {
        self.members.iter().filter(move |m| **m != self.trigger)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Computes a [`TriggerClosure`] over a catalog.
///
/// Uses an explicit worklist and a visited set, so attribute cycles
/// (including an attribute that marks itself) terminate and every attribute
/// is examined at most once. An indirect trigger with invalid applicability
/// metadata is reported as a warning, left out, and not expanded further.
pub struct ClosureResolver<'a> {
    catalog: &'a dyn TypeCatalog,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> ClosureResolver<'a> {
    pub fn new(catalog: &'a dyn TypeCatalog, sink: &'a dyn DiagnosticSink) -> Self {
        Self { catalog, sink }
    }

    pub fn resolve(&self, trigger: &QualifiedName) -> TriggerClosure {
        let mut closure = TriggerClosure::trivial(trigger.clone());
        let mut visited: BTreeSet<QualifiedName> = BTreeSet::from([trigger.clone()]);
        let mut worklist: VecDeque<QualifiedName> = VecDeque::from([trigger.clone()]);

        while let Some(current) = worklist.pop_front() {
            for candidate in self.catalog.types_with_attribute(&current) {
                if !candidate.kind().is_attribute()
                    || !self.catalog.is_annotated_with(candidate.name(), &current)
                {
                    continue;
                }
                if !visited.insert(candidate.name().clone()) {
                    continue;
                }

                match trigger_violation(&candidate) {
                    None => {
                        closure.members.insert(candidate.name().clone());
                        worklist.push_back(candidate.name().clone());
                    }
                    Some(reason) => self.sink.warning(format!(
                        "ignoring indirect trigger {} (marked by {}): {}",
                        candidate.name(),
                        current,
                        reason
                    )),
                }
            }
        }

        closure
    }
}

fn trigger_violation(candidate: &DeclaredType) -> Option<&'static str> {
    match candidate.attribute_meta() {
        Some(meta) => meta.trigger_violation(),
        None => Some("missing retention and target metadata"),
    }
}

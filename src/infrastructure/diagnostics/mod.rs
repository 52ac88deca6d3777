//! Diagnostic sinks
//!
//! - `TracingSink` forwards to `tracing` (notes at info, warnings at warn)
//! - `CollectingSink` keeps every diagnostic, optionally forwarding too

use std::sync::{Mutex, PoisonError};

use crate::domain::ports::{Diagnostic, DiagnosticSink, Severity};

/// Forwards diagnostics to the `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Note => tracing::info!(target: "wireup", "{}", diagnostic.message),
            Severity::Warning => tracing::warn!(target: "wireup", "{}", diagnostic.message),
        }
    }
}

/// Keeps diagnostics in memory for reports and assertions
#[derive(Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
    forward: Option<Box<dyn DiagnosticSink>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect and also pass every diagnostic on to `sink`
    pub fn forwarding_to(sink: impl DiagnosticSink + 'static) -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            forward: Some(Box::new(sink)),
        }
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn warnings(&self) -> Vec<Diagnostic> {
        self.diagnostics()
            .into_iter()
            .filter(|d| d.severity == Severity::Warning)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether any diagnostic message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.diagnostics().iter().any(|d| d.message.contains(needle))
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        if let Some(forward) = &self.forward {
            forward.report(diagnostic.clone());
        }
        self.diagnostics
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

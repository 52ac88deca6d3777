//! Diagnostics Port
//!
//! The host's diagnostic channel. Everything the pipeline recovers from
//! (missing manifests, write failures, invalid triggers) is reported here.

use serde::Serialize;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational: progress or recovered conditions
    Note,
    /// Something was skipped but the build continues
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Note => write!(f, "note"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A message for the host's diagnostic channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn note(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Note,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Trait for receiving diagnostics
///
/// Implementations:
/// - `TracingSink`: forwards to `tracing`
/// - `CollectingSink`: keeps diagnostics for reports and tests
/// - `NoopSink`: silent operation
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);

    fn note(&self, message: String) {
        self.report(Diagnostic::note(message));
    }

    fn warning(&self, message: String) {
        self.report(Diagnostic::warning(message));
    }
}

/// No-op sink for silent operation
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn report(&self, _diagnostic: Diagnostic) {}
}

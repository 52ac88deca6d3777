//! Error types for wireup
//!
//! Library errors use `thiserror`. The generation pipeline itself never
//! returns these for per-service failures; those degrade to diagnostics.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for wireup operations
pub type WireupResult<T> = Result<T, WireupError>;

/// Main error type for wireup operations
#[derive(Error, Debug)]
pub enum WireupError {
    /// A qualified name that cannot name a type
    #[error("invalid qualified name '{name}': {reason}")]
    InvalidQualifiedName { name: String, reason: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Catalog file could not be loaded
    #[error(transparent)]
    Catalog(#[from] crate::infrastructure::catalog::CatalogError),

    /// A resource or source artifact operation failed
    #[error(transparent)]
    Resource(#[from] crate::domain::ports::ResourceError),

    /// Adapter template references an unknown placeholder
    #[error("unknown placeholder '{{{{{placeholder}}}}}' in registration template")]
    UnknownPlaceholder { placeholder: String },

    /// `accumulate` or `finalize` called after the terminal pass
    #[error("session already finalized; start a new session for a new build")]
    SessionFinalized,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

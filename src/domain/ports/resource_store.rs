//! ResourceStore port - the host's named-resource primitives
//!
//! Manifests live under a class output root and are addressed by path;
//! adapter sources live under a source output root and are addressed by
//! qualified name. A resource cannot be reopened for writing in place, so
//! updating a manifest means read, delete, then create.

use thiserror::Error;

use crate::domain::value_objects::QualifiedName;

/// Result type for resource operations
pub type ResourceResult<T> = Result<T, ResourceError>;

/// Resource operation errors
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Resource does not exist (not an error for manifests)
    #[error("resource not found: {0}")]
    NotFound(String),

    /// Resource exists and the operation refuses to clobber it
    #[error("resource already exists: {0}")]
    AlreadyExists(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl ResourceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResourceError::NotFound(_))
    }

    /// Map an I/O error on `path`, keeping not-found and already-exists distinct.
    pub fn from_io(path: impl Into<String>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => ResourceError::NotFound(path),
            std::io::ErrorKind::AlreadyExists => ResourceError::AlreadyExists(path),
            _ => ResourceError::Io { path, source: err },
        }
    }
}

/// Abstract resource interface supplied by the host
///
/// Implementations:
/// - `LocalResourceStore` - directories on disk
/// - `MemoryResourceStore` - in-memory, for tests and dry runs
pub trait ResourceStore {
    /// Read an existing resource, or `ResourceError::NotFound`
    fn open_existing(&self, path: &str) -> ResourceResult<String>;

    fn delete(&self, path: &str) -> ResourceResult<()>;

    /// Create a new resource; fails if one already exists at `path`.
    ///
    /// `originating` names the declared types the content was derived from.
    fn create_resource(
        &self,
        path: &str,
        originating: &[QualifiedName],
        content: &str,
    ) -> ResourceResult<()>;

    fn source_artifact_exists(&self, name: &QualifiedName) -> bool;

    /// Replace the content of an existing source artifact
    fn overwrite_source_artifact(&self, name: &QualifiedName, content: &str)
        -> ResourceResult<()>;

    /// Create a new source artifact; fails if it already exists.
    fn create_source_artifact(
        &self,
        name: &QualifiedName,
        originating: &QualifiedName,
        content: &str,
    ) -> ResourceResult<()>;
}

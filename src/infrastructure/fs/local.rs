//! Local Resource Store
//!
//! Implements the ResourceStore port on disk. Manifests go under the class
//! output root, adapter sources under the source output root with the
//! package mapped to directories.

use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ports::resource_store::{ResourceError, ResourceResult, ResourceStore};
use crate::domain::value_objects::QualifiedName;

/// Resource store backed by two output directories
#[derive(Debug, Clone)]
pub struct LocalResourceStore {
    class_root: PathBuf,
    source_root: PathBuf,
    extension: String,
}

impl LocalResourceStore {
    pub fn new(class_root: impl Into<PathBuf>, source_root: impl Into<PathBuf>) -> Self {
        Self {
            class_root: class_root.into(),
            source_root: source_root.into(),
            extension: "rs".to_string(),
        }
    }

    /// File extension of generated sources (without the dot)
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn class_root(&self) -> &Path {
        &self.class_root
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// On-disk path of a resource; rejects paths that leave the class root.
    pub fn resource_path(&self, path: &str) -> ResourceResult<PathBuf> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if path.is_empty() || escapes {
            return Err(ResourceError::Other(format!(
                "resource path '{}' escapes output root '{}'",
                path,
                self.class_root.display()
            )));
        }
        Ok(self.class_root.join(relative))
    }

    /// On-disk path of a generated source artifact
    pub fn source_path(&self, name: &QualifiedName) -> PathBuf {
        let mut path = self.source_root.clone();
        for segment in name.package().split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.{}", name.name(), self.extension));
        path
    }
}

/// Write `content` through a temp file in the target directory, then rename.
///
/// With `clobber == false` the rename fails if the target already exists.
fn atomic_write(path: &Path, content: &str, clobber: bool) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;

    if clobber {
        tmp.persist(path).map_err(|e| e.error)?;
    } else {
        tmp.persist_noclobber(path).map_err(|e| e.error)?;
    }
    Ok(())
}

impl ResourceStore for LocalResourceStore {
    fn open_existing(&self, path: &str) -> ResourceResult<String> {
        let file = self.resource_path(path)?;
        std::fs::read_to_string(&file).map_err(|e| ResourceError::from_io(path, e))
    }

    fn delete(&self, path: &str) -> ResourceResult<()> {
        let file = self.resource_path(path)?;
        std::fs::remove_file(&file).map_err(|e| ResourceError::from_io(path, e))
    }

    fn create_resource(
        &self,
        path: &str,
        originating: &[QualifiedName],
        content: &str,
    ) -> ResourceResult<()> {
        let file = self.resource_path(path)?;
        tracing::trace!(path, originating = originating.len(), "creating resource");
        atomic_write(&file, content, false).map_err(|e| ResourceError::from_io(path, e))
    }

    fn source_artifact_exists(&self, name: &QualifiedName) -> bool {
        self.source_path(name).is_file()
    }

    fn overwrite_source_artifact(
        &self,
        name: &QualifiedName,
        content: &str,
    ) -> ResourceResult<()> {
        let file = self.source_path(name);
        atomic_write(&file, content, true).map_err(|e| ResourceError::from_io(name.to_string(), e))
    }

    fn create_source_artifact(
        &self,
        name: &QualifiedName,
        originating: &QualifiedName,
        content: &str,
    ) -> ResourceResult<()> {
        let file = self.source_path(name);
        tracing::trace!(artifact = %name, originating = %originating, "creating source artifact");
        atomic_write(&file, content, false).map_err(|e| ResourceError::from_io(name.to_string(), e))
    }
}

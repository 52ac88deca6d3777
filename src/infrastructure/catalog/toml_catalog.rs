//! TOML catalog host
//!
//! Describes declared types in a TOML file so the pipeline can run outside a
//! compiler. Each type names the pass in which it becomes visible.
//!
//! ```toml
//! [[type]]
//! name = "app.Plugin"
//! kind = "attribute"
//! retention = "runtime"
//! targets = ["type"]
//! attributes = [{ name = "wireup.Wire" }]
//!
//! [[type]]
//! name = "app.json.JsonCodec"
//! pass = 1
//! attributes = [{ name = "wireup.Wire", services = ["api.Codec"] }]
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::entities::{AttributeUse, DeclaredType};
use crate::domain::value_objects::{
    AttributeMeta, ElementKind, ElementTarget, QualifiedName, Retention,
};

use super::pass::CatalogPass;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid type #{index} '{name}' in catalog: {message}")]
    InvalidType {
        index: usize,
        name: String,
        message: String,
    },

    #[error("type '{name}' is declared more than once in catalog")]
    Duplicate { name: String },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCatalogFile {
    #[serde(default, rename = "type")]
    types: Vec<TomlType>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlType {
    name: String,
    #[serde(default)]
    package: Option<String>,
    #[serde(default)]
    kind: ElementKind,
    #[serde(default)]
    pass: u32,
    #[serde(default)]
    retention: Option<Retention>,
    #[serde(default)]
    targets: Option<Vec<ElementTarget>>,
    #[serde(default)]
    attributes: Vec<TomlAttributeUse>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlAttributeUse {
    name: String,
    #[serde(default)]
    services: Vec<String>,
}

/// A catalog of declared types spread over one or more passes
#[derive(Debug, Clone, Default)]
pub struct TomlCatalog {
    /// (pass, type), in file order
    types: Vec<(u32, DeclaredType)>,
}

impl TomlCatalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse catalog content; `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> Result<Self, CatalogError> {
        let file: TomlCatalogFile = toml::from_str(content).map_err(|e| CatalogError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut seen = BTreeSet::new();
        let mut types = Vec::with_capacity(file.types.len());
        for (index, raw) in file.types.into_iter().enumerate() {
            let pass = raw.pass;
            let ty = convert(index, raw)?;
            if !seen.insert(ty.name().clone()) {
                return Err(CatalogError::Duplicate {
                    name: ty.name().to_string(),
                });
            }
            types.push((pass, ty));
        }

        Ok(Self { types })
    }

    /// Index of the terminal pass (0 for an empty catalog)
    pub fn last_pass(&self) -> u32 {
        self.types.iter().map(|(p, _)| *p).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// View of pass `n`: types with `pass == n` are fresh, earlier ones visible.
    pub fn pass(&self, n: u32) -> CatalogPass {
        CatalogPass::with_earlier(self.types_where(|p| p == n), self.types_where(|p| p < n))
    }

    /// Every type regardless of pass
    pub fn all(&self) -> CatalogPass {
        CatalogPass::new(self.types_where(|_| true))
    }

    fn types_where(&self, keep: impl Fn(u32) -> bool) -> Vec<DeclaredType> {
        self.types
            .iter()
            .filter(|(p, _)| keep(*p))
            .map(|(_, t)| t.clone())
            .collect()
    }
}

fn convert(index: usize, raw: TomlType) -> Result<DeclaredType, CatalogError> {
    let invalid = |message: String| CatalogError::InvalidType {
        index,
        name: raw.name.clone(),
        message,
    };

    let name = match &raw.package {
        Some(package) => {
            let in_package = raw
                .name
                .strip_prefix(package.as_str())
                .and_then(|rest| rest.strip_prefix('.'))
                .ok_or_else(|| invalid(format!("name is not inside package '{}'", package)))?;
            QualifiedName::new(package.clone(), in_package)
        }
        None => QualifiedName::parse(&raw.name),
    }
    .map_err(|e| invalid(e.to_string()))?;

    let mut ty = DeclaredType::new(name, raw.kind);

    if raw.kind.is_attribute() && (raw.retention.is_some() || raw.targets.is_some()) {
        ty = ty.with_attribute_meta(AttributeMeta::new(
            raw.retention.unwrap_or_default(),
            raw.targets.clone().unwrap_or_default(),
        ));
    } else if !raw.kind.is_attribute() && (raw.retention.is_some() || raw.targets.is_some()) {
        return Err(invalid(
            "retention and targets only apply to attribute types".to_string(),
        ));
    }

    for attribute in &raw.attributes {
        let attribute_name =
            QualifiedName::parse(&attribute.name).map_err(|e| invalid(e.to_string()))?;
        ty = ty.with_attribute_use(
            AttributeUse::new(attribute_name).with_services(attribute.services.iter().cloned()),
        );
    }

    Ok(ty)
}

//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{RegistrationTemplate, DEFAULT_REGISTRATION_SUFFIX, DEFAULT_TEMPLATE};
use crate::domain::value_objects::{ConfigWarning, QualifiedName};
use crate::error::{WireupError, WireupResult};

use super::loader;

pub const DEFAULT_TRIGGER: &str = "wireup.Wire";
pub const DEFAULT_DISCOVERY_ROOT: &str = "META-INF/services";
pub const DEFAULT_REGISTRATION_SERVICE: &str = "wireup.Registration";

/// Trigger attribute configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerConfig {
    /// Qualified name of the attribute that marks service implementations
    #[serde(default = "default_trigger")]
    pub attribute: String,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            attribute: default_trigger(),
        }
    }
}

fn default_trigger() -> String {
    DEFAULT_TRIGGER.to_string()
}

/// Discovery manifest configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Directory, relative to the class output, holding one manifest per service
    #[serde(default = "default_discovery_root")]
    pub root: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            root: default_discovery_root(),
        }
    }
}

fn default_discovery_root() -> String {
    DEFAULT_DISCOVERY_ROOT.to_string()
}

/// Generated registration adapters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Meta-service listing every generated adapter
    #[serde(default = "default_registration_service")]
    pub service: String,

    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// File extension of generated sources
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Custom adapter template, relative to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PathBuf>,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            service: default_registration_service(),
            suffix: default_suffix(),
            extension: default_extension(),
            template: None,
        }
    }
}

fn default_registration_service() -> String {
    DEFAULT_REGISTRATION_SERVICE.to_string()
}

fn default_suffix() -> String {
    DEFAULT_REGISTRATION_SUFFIX.to_string()
}

fn default_extension() -> String {
    "rs".to_string()
}

/// Output directories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root for manifests
    #[serde(default = "default_class_dir")]
    pub class_dir: PathBuf,

    /// Root for generated adapter sources
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            class_dir: default_class_dir(),
            source_dir: default_source_dir(),
        }
    }
}

fn default_class_dir() -> PathBuf {
    PathBuf::from("target/wireup/classes")
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("target/wireup/generated")
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub trigger: TriggerConfig,

    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub registration: RegistrationConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> WireupResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> WireupResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (WIREUP_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// The configured trigger attribute as a qualified name
    pub fn trigger_attribute(&self) -> WireupResult<QualifiedName> {
        QualifiedName::parse(&self.trigger.attribute)
    }

    /// Adapter template: the configured file, or the built-in one.
    ///
    /// A relative template path is resolved against `base`.
    pub fn registration_template(&self, base: &Path) -> WireupResult<RegistrationTemplate> {
        match &self.registration.template {
            Some(path) => {
                let path = base.join(path);
                let source = std::fs::read_to_string(&path).map_err(|e| {
                    WireupError::InvalidConfig {
                        file: path.clone(),
                        message: format!("cannot read registration template: {}", e),
                    }
                })?;
                RegistrationTemplate::new(&source)
            }
            None => RegistrationTemplate::new(DEFAULT_TEMPLATE),
        }
    }
}

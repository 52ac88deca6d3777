//! Generate Options

use crate::config::{Config, DEFAULT_DISCOVERY_ROOT, DEFAULT_REGISTRATION_SERVICE};
use crate::domain::entities::DEFAULT_REGISTRATION_SUFFIX;
use crate::domain::value_objects::QualifiedName;
use crate::error::WireupResult;

/// Settings that shape one generation session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Attribute that marks service implementations
    pub trigger: QualifiedName,
    /// Directory holding one manifest per service
    pub discovery_root: String,
    /// Meta-service listing every generated adapter
    pub registration_service: String,
    /// Suffix of generated adapter names
    pub suffix: String,
}

impl GenerateOptions {
    /// Default settings for `trigger`
    pub fn new(trigger: QualifiedName) -> Self {
        Self {
            trigger,
            discovery_root: DEFAULT_DISCOVERY_ROOT.to_string(),
            registration_service: DEFAULT_REGISTRATION_SERVICE.to_string(),
            suffix: DEFAULT_REGISTRATION_SUFFIX.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> WireupResult<Self> {
        Ok(Self {
            trigger: config.trigger_attribute()?,
            discovery_root: config.discovery.root.clone(),
            registration_service: config.registration.service.clone(),
            suffix: config.registration.suffix.clone(),
        })
    }
}

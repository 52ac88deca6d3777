//! Configuration module for wireup
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (WIREUP_*)
//! 3. Project config (wireup.toml)
//! 4. User config (~/.config/wireup/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{parse_with_warnings, CONFIG_FILE_NAME, CONFIG_HOME_VAR};
pub use types::{
    Config, DiscoveryConfig, OutputConfig, RegistrationConfig, TriggerConfig,
    DEFAULT_DISCOVERY_ROOT, DEFAULT_REGISTRATION_SERVICE, DEFAULT_TRIGGER,
};

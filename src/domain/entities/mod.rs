//! Domain Entities
//!
//! - `DeclaredType` - A type snapshot supplied by the host catalog
//! - `ServiceMap` - Service name to implementation set
//! - `Manifest` - The persisted discovery file for one service
//! - `GeneratedRegistration` - A generated adapter for one pair

mod declared_type;
mod manifest;
mod registration;
mod service_map;

pub use declared_type::{AttributeUse, DeclaredType};
pub use manifest::{manifest_path, merge, parse_manifest, render_manifest, Manifest};
pub use registration::{
    GeneratedRegistration, RegistrationTemplate, DEFAULT_REGISTRATION_SUFFIX, DEFAULT_TEMPLATE,
    GENERATOR,
};
pub use service_map::ServiceMap;

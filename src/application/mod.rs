//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RegistryProcessor` - Per-pass host entry point (accumulate, then write on the terminal pass)
//!
//! ## Services
//!
//! - `Session` - Accumulation state of one build
//! - `RegistryWriter` - Read, merge and rewrite one manifest
//! - `RegistrationGenerator` - Create or overwrite one adapter source

pub mod generate;
pub mod registration_generator;
pub mod registry_writer;
pub mod session;

pub use generate::{Failure, FailureStage, GenerateOptions, ProcessReport, RegistryProcessor};
pub use registration_generator::{ArtifactWrite, RegistrationGenerator};
pub use registry_writer::{ManifestWrite, RegistryWriter};
pub use session::Session;

//! Generate Use Case Module
//!
//! Drives a build session pass by pass and writes manifests and
//! registration adapters on the terminal pass.

mod options;
mod processor;
mod report;


pub use options::GenerateOptions;
pub use processor::RegistryProcessor;
pub use report::{Failure, FailureStage, ProcessReport};

//! Domain Services
//!
//! Pure logic over the catalog port: trigger closure, payload resolution
//! and service map construction.

mod closure;
mod resolution;
mod service_map_builder;

pub use closure::{ClosureResolver, TriggerClosure};
pub use resolution::{resolve_payload, ServiceResolution};
pub use service_map_builder::ServiceMapBuilder;

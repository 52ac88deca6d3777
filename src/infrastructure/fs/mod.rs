//! Resource store implementations
//!
//! Concrete implementations of the ResourceStore port.

mod local;
mod memory;

pub use local::LocalResourceStore;
pub use memory::MemoryResourceStore;

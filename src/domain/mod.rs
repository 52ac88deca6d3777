//! Domain Layer
//!
//! The core of wireup - trigger closure, service resolution and manifest
//! merging, with no I/O of its own.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (DeclaredType, ServiceMap, Manifest, GeneratedRegistration)
//! - `value_objects/` - Immutable value types (QualifiedName, ElementKind, AttributeMeta)
//! - `services/` - Domain services (ClosureResolver, ServiceMapBuilder, payload resolution)
//! - `ports/` - Interface definitions for the host platform
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Host as ports** - Catalog, resources and diagnostics are traits
//! 3. **Degrade, don't abort** - Per-item failures become diagnostics

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

//! typereg - Component type registry
//!
//! This crate re-exports all layers of the typereg system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: typereg_registry   — Type namespace, dependencies, property descriptors
//! Layer 0: typereg_foundation — Core types (ComponentType, name hashing, Error)
//! ```

pub use typereg_foundation as foundation;
pub use typereg_registry as registry;

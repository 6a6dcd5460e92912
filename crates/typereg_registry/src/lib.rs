//! Type namespace and property registry for typereg.
//!
//! This crate provides:
//! - [`TypeNamespace`] - Interning of component type identifiers, plus the
//!   one-to-one dependency relation between types
//! - [`PropertyRegistry`] - Per-type property descriptors with an explicit
//!   init/shutdown lifecycle
//! - [`Registry`] - Composition root owning both, driven by [`RegistryConfig`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod namespace;
pub mod properties;
pub mod registry;

pub use config::{NamespaceLifetime, RegistryConfig};
#[cfg(feature = "serde")]
pub use namespace::NamespaceSnapshot;
pub use namespace::{ComponentTypeData, TypeNamespace};
pub use properties::PropertyRegistry;
pub use registry::Registry;

pub use typereg_foundation::{
    ComponentType, Error, ErrorKind, PropertyDescriptor, Result, name_hash,
};

//! Core types for typereg.
//!
//! This crate provides:
//! - [`ComponentType`] - Stable handles for interned component types
//! - [`name_hash`] - The deterministic 32-bit hash used for identifiers and property names
//! - [`PropertyDescriptor`] - The capability set the registry consumes from descriptors
//! - [`Error`] - Contract-violation errors with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod component_type;
mod descriptor;
mod error;
mod hash;

pub use component_type::ComponentType;
pub use descriptor::PropertyDescriptor;
pub use error::{Error, ErrorKind, Result};
pub use hash::{crc32, name_hash};

//! Component type handles.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Handle for an interned component type.
///
/// A handle is an index into the type namespace that produced it. It carries
/// no payload; the identifier, hash, and dependency live in the namespace.
/// Once assigned, an index is never reassigned or reused while that
/// namespace lives.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentType(u32);

impl ComponentType {
    /// Sentinel handle that never refers to an interned type.
    pub const INVALID: ComponentType = ComponentType(u32::MAX);

    /// Creates a handle from a raw namespace index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this handle.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// Returns true unless this is [`ComponentType::INVALID`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl Default for ComponentType {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Debug for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ComponentType({})", self.0)
        } else {
            write!(f, "ComponentType(invalid)")
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "#{}", self.0)
        } else {
            write!(f, "#invalid")
        }
    }
}

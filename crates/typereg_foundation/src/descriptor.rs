//! Property descriptor capability.

use std::fmt;

/// Metadata describing one property of a component type.
///
/// The registry only needs to find descriptors by name hash and to look one
/// level into nested descriptors. Everything else a descriptor does (reading,
/// writing, serializing values) belongs to the implementor.
pub trait PropertyDescriptor {
    /// Hash of the property name, as produced by [`name_hash`](crate::name_hash).
    fn name_hash(&self) -> u32;

    /// Nested descriptors, in declaration order.
    fn children(&self) -> &[Box<dyn PropertyDescriptor>] {
        &[]
    }
}

impl fmt::Debug for dyn PropertyDescriptor + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name_hash", &format_args!("{:#010x}", self.name_hash()))
            .field("children", &self.children().len())
            .finish()
    }
}

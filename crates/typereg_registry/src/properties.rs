//! Property descriptor storage.
//!
//! The registry owns every descriptor handed to it. Descriptors are released
//! together on [`PropertyRegistry::shutdown`], type by type in handle order
//! and, within a type, in insertion order.

use std::collections::BTreeMap;

use typereg_foundation::{ComponentType, Error, PropertyDescriptor, Result, name_hash};

use crate::config::RegistryConfig;
use crate::namespace::TypeNamespace;

type Descriptors = Vec<Box<dyn PropertyDescriptor>>;

/// Descriptor lists keyed by component type, ordered by handle.
#[derive(Debug)]
struct PropertyMap {
    slots: BTreeMap<ComponentType, Descriptors>,
    /// Initial capacity for new slots.
    slot_capacity: usize,
}

impl PropertyMap {
    fn new(slot_capacity: usize) -> Self {
        Self {
            slots: BTreeMap::new(),
            slot_capacity,
        }
    }

    fn slot(&self, ty: ComponentType) -> Option<&Descriptors> {
        self.slots.get(&ty)
    }

    fn slot_mut(&mut self, ty: ComponentType) -> &mut Descriptors {
        let capacity = self.slot_capacity;
        self.slots
            .entry(ty)
            .or_insert_with(|| Vec::with_capacity(capacity))
    }

    fn descriptor_count(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    /// Drops every descriptor, returning how many were released.
    fn release(self) -> usize {
        let mut released = 0;
        for (_, slot) in self.slots {
            released += slot.len();
            drop(slot);
        }
        released
    }
}

/// Lifecycle state of a [`PropertyRegistry`].
#[derive(Debug, Default)]
enum RegistryState {
    #[default]
    Uninitialized,
    Active(PropertyMap),
}

/// Per-type property descriptors with an explicit init/shutdown lifecycle.
///
/// Every operation other than [`init`](Self::init) requires an active
/// registry. Component types are resolved through a [`TypeNamespace`] passed
/// by the caller; the registry never owns the namespace.
#[derive(Debug, Default)]
pub struct PropertyRegistry {
    state: RegistryState,
}

impl PropertyRegistry {
    /// Creates an uninitialized registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true between `init` and `shutdown`.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, RegistryState::Active(_))
    }

    /// Starts a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is already initialized.
    pub fn init(&mut self, config: &RegistryConfig) -> Result<()> {
        if self.is_initialized() {
            log::warn!("property registry initialized twice");
            return Err(Error::already_initialized());
        }
        self.state = RegistryState::Active(PropertyMap::new(config.slot_capacity));
        log::info!("property registry initialized");
        Ok(())
    }

    /// Ends the session, dropping every owned descriptor exactly once.
    ///
    /// Returns the number of descriptors released. Afterwards the registry
    /// is back to its pre-`init` state.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is not initialized.
    pub fn shutdown(&mut self) -> Result<usize> {
        let RegistryState::Active(map) = std::mem::take(&mut self.state) else {
            log::warn!("property registry shut down while not initialized");
            return Err(Error::not_initialized());
        };
        let types = map.slots.len();
        let released = map.release();
        log::info!(
            "property registry shut down: released {released} descriptors across {types} component types"
        );
        Ok(released)
    }

    /// Registers `descriptor` under the component type `type_id`, interning
    /// the type if needed. The registry takes ownership of the descriptor.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is not initialized or `type_id`
    /// cannot be interned.
    pub fn add(
        &mut self,
        namespace: &mut TypeNamespace,
        type_id: &str,
        descriptor: Box<dyn PropertyDescriptor>,
    ) -> Result<ComponentType> {
        let map = self.active_mut()?;
        let ty = namespace.component_type(type_id)?;
        log::trace!(
            "registered property {:#010x} on {type_id:?}",
            descriptor.name_hash()
        );
        map.slot_mut(ty).push(descriptor);
        Ok(ty)
    }

    /// Returns the descriptor list for `ty`, creating an empty one if the
    /// type has none yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is not initialized.
    pub fn descriptors_mut(
        &mut self,
        ty: ComponentType,
    ) -> Result<&mut Vec<Box<dyn PropertyDescriptor>>> {
        Ok(self.active_mut()?.slot_mut(ty))
    }

    /// Returns the descriptors registered for `ty`, or an empty slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is not initialized.
    pub fn descriptors(&self, ty: ComponentType) -> Result<&[Box<dyn PropertyDescriptor>]> {
        Ok(self.active()?.slot(ty).map(Vec::as_slice).unwrap_or_default())
    }

    /// Finds the descriptor of `ty` whose name hash is `name_hash`.
    ///
    /// Descriptors are visited in insertion order. Each one is checked
    /// itself, then its direct children, before moving to the next. Returns
    /// `Ok(None)` if nothing matches. The lookup never creates a descriptor
    /// list for `ty`.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is not initialized.
    pub fn descriptor(
        &self,
        ty: ComponentType,
        name_hash: u32,
    ) -> Result<Option<&dyn PropertyDescriptor>> {
        let Some(slot) = self.active()?.slot(ty) else {
            return Ok(None);
        };
        Ok(find_descriptor(slot, name_hash))
    }

    /// Finds a descriptor by component type identifier and property name.
    ///
    /// Interns `type_id` if it has not been seen.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is not initialized or `type_id`
    /// cannot be interned.
    pub fn descriptor_by_name(
        &self,
        namespace: &mut TypeNamespace,
        type_id: &str,
        property_name: &str,
    ) -> Result<Option<&dyn PropertyDescriptor>> {
        self.active()?;
        let ty = namespace.component_type(type_id)?;
        self.descriptor(ty, name_hash(property_name))
    }

    /// Returns the number of component types with a descriptor list.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is not initialized.
    pub fn type_count(&self) -> Result<usize> {
        Ok(self.active()?.slots.len())
    }

    /// Returns the number of descriptors owned across all types.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry is not initialized.
    pub fn descriptor_count(&self) -> Result<usize> {
        Ok(self.active()?.descriptor_count())
    }

    fn active(&self) -> Result<&PropertyMap> {
        match &self.state {
            RegistryState::Active(map) => Ok(map),
            RegistryState::Uninitialized => Err(Error::not_initialized()),
        }
    }

    fn active_mut(&mut self) -> Result<&mut PropertyMap> {
        match &mut self.state {
            RegistryState::Active(map) => Ok(map),
            RegistryState::Uninitialized => Err(Error::not_initialized()),
        }
    }
}

fn find_descriptor(descriptors: &Descriptors, name_hash: u32) -> Option<&dyn PropertyDescriptor> {
    for descriptor in descriptors {
        if descriptor.name_hash() == name_hash {
            return Some(descriptor.as_ref());
        }
        if let Some(child) = descriptor
            .children()
            .iter()
            .find(|child| child.name_hash() == name_hash)
        {
            return Some(child.as_ref());
        }
    }
    None
}

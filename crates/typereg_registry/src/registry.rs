//! Composition root owning a type namespace and a property registry.
//!
//! Most callers hold one [`Registry`] for the lifetime of the application and
//! pass it by reference to editors, serializers, and component factories.
//! Subsystems that only need one half can borrow it via
//! [`namespace`](Registry::namespace) or [`properties`](Registry::properties).

use typereg_foundation::{ComponentType, PropertyDescriptor, Result};

use crate::config::{NamespaceLifetime, RegistryConfig};
use crate::namespace::TypeNamespace;
use crate::properties::PropertyRegistry;

/// A type namespace plus a property registry, driven by one configuration.
#[derive(Debug)]
pub struct Registry {
    config: RegistryConfig,
    namespace: TypeNamespace,
    properties: PropertyRegistry,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl Registry {
    /// Creates an uninitialized registry.
    #[must_use]
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            namespace: TypeNamespace::with_max_id_len(config.max_id_len),
            properties: PropertyRegistry::new(),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the type namespace.
    #[must_use]
    pub fn namespace(&self) -> &TypeNamespace {
        &self.namespace
    }

    /// Returns the type namespace mutably.
    pub fn namespace_mut(&mut self) -> &mut TypeNamespace {
        &mut self.namespace
    }

    /// Returns the property registry.
    #[must_use]
    pub fn properties(&self) -> &PropertyRegistry {
        &self.properties
    }

    /// Returns true between `init` and `shutdown`.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.properties.is_initialized()
    }

    /// Starts a session.
    ///
    /// # Errors
    ///
    /// Returns an error if a session is already active.
    pub fn init(&mut self) -> Result<()> {
        self.properties.init(&self.config)
    }

    /// Ends the session, releasing every descriptor.
    ///
    /// With [`NamespaceLifetime::PerSession`] the namespace is cleared too;
    /// otherwise interned types and their dependencies carry over.
    ///
    /// # Errors
    ///
    /// Returns an error if no session is active.
    pub fn shutdown(&mut self) -> Result<usize> {
        let released = self.properties.shutdown()?;
        if self.config.namespace_lifetime == NamespaceLifetime::PerSession {
            self.namespace.clear();
        }
        Ok(released)
    }

    /// Registers `descriptor` under `type_id`. See [`PropertyRegistry::add`].
    ///
    /// # Errors
    ///
    /// Returns an error if no session is active or `type_id` is too long.
    pub fn add(
        &mut self,
        type_id: &str,
        descriptor: Box<dyn PropertyDescriptor>,
    ) -> Result<ComponentType> {
        self.properties.add(&mut self.namespace, type_id, descriptor)
    }

    /// Records that `type_id` depends on `dependency_id`.
    /// See [`TypeNamespace::register_dependency`].
    ///
    /// # Errors
    ///
    /// Returns an error if `type_id` was never interned.
    pub fn register_dependency(&mut self, type_id: &str, dependency_id: &str) -> Result<()> {
        self.namespace.register_dependency(type_id, dependency_id)
    }

    /// Interns `id`, returning its handle.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is new and too long.
    pub fn component_type(&mut self, id: &str) -> Result<ComponentType> {
        self.namespace.component_type(id)
    }

    /// Looks up a type by identifier hash.
    ///
    /// # Errors
    ///
    /// Returns an error if no interned type has this hash.
    pub fn component_type_from_hash(&self, hash: u32) -> Result<ComponentType> {
        self.namespace.component_type_from_hash(hash)
    }

    /// Returns the identifier hash of `ty`.
    #[must_use]
    pub fn component_type_hash(&self, ty: ComponentType) -> Option<u32> {
        self.namespace.component_type_hash(ty)
    }

    /// Returns the identifier of the type at `index`.
    #[must_use]
    pub fn component_type_id(&self, index: u32) -> Option<&str> {
        self.namespace.component_type_id(index)
    }

    /// Returns the number of interned types.
    #[must_use]
    pub fn component_type_count(&self) -> usize {
        self.namespace.len()
    }

    /// Returns true if `dependent` directly depends on `dependency`.
    #[must_use]
    pub fn depends(&self, dependent: ComponentType, dependency: ComponentType) -> bool {
        self.namespace.depends(dependent, dependency)
    }

    /// Returns the descriptors registered for `ty`.
    ///
    /// # Errors
    ///
    /// Returns an error if no session is active.
    pub fn descriptors(&self, ty: ComponentType) -> Result<&[Box<dyn PropertyDescriptor>]> {
        self.properties.descriptors(ty)
    }

    /// Returns the descriptor list for `ty`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if no session is active.
    pub fn descriptors_mut(
        &mut self,
        ty: ComponentType,
    ) -> Result<&mut Vec<Box<dyn PropertyDescriptor>>> {
        self.properties.descriptors_mut(ty)
    }

    /// Finds a descriptor of `ty` by name hash.
    ///
    /// # Errors
    ///
    /// Returns an error if no session is active.
    pub fn descriptor(
        &self,
        ty: ComponentType,
        name_hash: u32,
    ) -> Result<Option<&dyn PropertyDescriptor>> {
        self.properties.descriptor(ty, name_hash)
    }

    /// Finds a descriptor by type identifier and property name.
    ///
    /// # Errors
    ///
    /// Returns an error if no session is active or `type_id` is too long.
    pub fn descriptor_by_name(
        &mut self,
        type_id: &str,
        property_name: &str,
    ) -> Result<Option<&dyn PropertyDescriptor>> {
        self.properties
            .descriptor_by_name(&mut self.namespace, type_id, property_name)
    }
}

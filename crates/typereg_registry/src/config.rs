//! Configuration for the registry.

/// Default identifier capacity in bytes.
pub const DEFAULT_MAX_ID_LEN: usize = 49;

/// Whether interned component types outlive a registry session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NamespaceLifetime {
    /// Interned types survive `shutdown`; handles stay valid across sessions.
    #[default]
    Persistent,
    /// The namespace is cleared on `shutdown`; the next session starts empty.
    PerSession,
}

/// Configuration for a [`Registry`](crate::Registry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Maximum identifier length in bytes.
    pub max_id_len: usize,

    /// What happens to interned types on `shutdown`.
    pub namespace_lifetime: NamespaceLifetime,

    /// Initial capacity of each per-type descriptor list.
    pub slot_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_id_len: DEFAULT_MAX_ID_LEN,
            namespace_lifetime: NamespaceLifetime::Persistent,
            slot_capacity: 0,
        }
    }
}

impl RegistryConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration whose namespace is cleared on every shutdown.
    #[must_use]
    pub fn per_session() -> Self {
        Self {
            namespace_lifetime: NamespaceLifetime::PerSession,
            ..Self::default()
        }
    }

    /// Builder method to set the identifier capacity.
    #[must_use]
    pub fn with_max_id_len(mut self, max_id_len: usize) -> Self {
        self.max_id_len = max_id_len;
        self
    }

    /// Builder method to set the namespace lifetime.
    #[must_use]
    pub fn with_namespace_lifetime(mut self, lifetime: NamespaceLifetime) -> Self {
        self.namespace_lifetime = lifetime;
        self
    }

    /// Builder method to set the per-type descriptor capacity.
    #[must_use]
    pub fn with_slot_capacity(mut self, slot_capacity: usize) -> Self {
        self.slot_capacity = slot_capacity;
        self
    }
}

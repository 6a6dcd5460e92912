//! Component type namespace.
//!
//! Interns component type identifiers into [`ComponentType`] handles and
//! records the one-to-one dependency relation between types.
//!
//! Identity is the identifier's 32-bit hash. Two identifiers that hash to the
//! same value are the same type: the first one interned wins and no string
//! comparison is made. Namespaces stay small (tens of types), so this is
//! accepted rather than guarded against.

use std::collections::HashMap;

use typereg_foundation::{ComponentType, Error, ErrorKind, Result, name_hash};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_MAX_ID_LEN;

/// Record for one interned component type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComponentTypeData {
    id: Box<str>,
    id_hash: u32,
    dependency: Option<ComponentType>,
}

impl ComponentTypeData {
    /// The identifier this type was interned from.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Hash of the identifier.
    #[must_use]
    pub fn id_hash(&self) -> u32 {
        self.id_hash
    }

    /// The type this type depends on, if any.
    #[must_use]
    pub fn dependency(&self) -> Option<ComponentType> {
        self.dependency
    }
}

/// Interner for component type identifiers.
///
/// Handles are assigned densely in interning order and never change.
/// It is not thread-safe; use external synchronization if needed.
#[derive(Clone, Debug)]
pub struct TypeNamespace {
    /// Records, indexed by handle.
    types: Vec<ComponentTypeData>,
    /// Map from identifier hash to handle.
    by_hash: HashMap<u32, ComponentType>,
    /// Identifier capacity in bytes.
    max_id_len: usize,
}

impl Default for TypeNamespace {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeNamespace {
    /// Creates an empty namespace with the default identifier capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_id_len(DEFAULT_MAX_ID_LEN)
    }

    /// Creates an empty namespace accepting identifiers up to `max_id_len` bytes.
    #[must_use]
    pub fn with_max_id_len(max_id_len: usize) -> Self {
        Self {
            types: Vec::new(),
            by_hash: HashMap::new(),
            max_id_len,
        }
    }

    /// Returns the identifier capacity in bytes.
    #[must_use]
    pub fn max_id_len(&self) -> usize {
        self.max_id_len
    }

    /// Interns `id`, returning its handle.
    ///
    /// Repeated calls with the same identifier return the same handle.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is new and longer than the identifier capacity.
    pub fn component_type(&mut self, id: &str) -> Result<ComponentType> {
        let id_hash = name_hash(id);
        if let Some(&ty) = self.by_hash.get(&id_hash) {
            return Ok(ty);
        }

        if id.len() > self.max_id_len {
            log::warn!(
                "rejected component type {id:?}: {} bytes exceeds capacity of {}",
                id.len(),
                self.max_id_len
            );
            return Err(Error::identifier_too_long(id, self.max_id_len));
        }

        let ty = self.next_handle()?;
        self.types.push(ComponentTypeData {
            id: id.into(),
            id_hash,
            dependency: None,
        });
        self.by_hash.insert(id_hash, ty);
        log::debug!("interned component type {id:?} as {ty}");
        Ok(ty)
    }

    /// Looks up `id` without interning it.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<ComponentType> {
        self.by_hash.get(&name_hash(id)).copied()
    }

    /// Looks up a type by its precomputed identifier hash.
    ///
    /// # Errors
    ///
    /// Returns an error if no interned type has this hash.
    pub fn component_type_from_hash(&self, hash: u32) -> Result<ComponentType> {
        self.by_hash
            .get(&hash)
            .copied()
            .ok_or_else(|| Error::unknown_type_hash(hash))
    }

    /// Returns the identifier hash of `ty`.
    #[must_use]
    pub fn component_type_hash(&self, ty: ComponentType) -> Option<u32> {
        self.data(ty).map(ComponentTypeData::id_hash)
    }

    /// Returns the identifier of the type at `index`.
    #[must_use]
    pub fn component_type_id(&self, index: u32) -> Option<&str> {
        self.types.get(index as usize).map(ComponentTypeData::id)
    }

    /// Returns the record for `ty`.
    #[must_use]
    pub fn data(&self, ty: ComponentType) -> Option<&ComponentTypeData> {
        self.types.get(ty.index() as usize)
    }

    /// Returns the number of interned types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates interned types in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentType, &ComponentTypeData)> + '_ {
        (0u32..).map(ComponentType::new).zip(self.types.iter())
    }

    /// Records that `id` depends on `dependency_id`.
    ///
    /// The dependency is interned if it has not been seen yet; the dependent
    /// must already exist. A type has at most one dependency, so a second call
    /// for the same `id` replaces the first.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` was never interned, or if `dependency_id` is
    /// new and too long. Nothing is interned when `id` is unknown.
    pub fn register_dependency(&mut self, id: &str, dependency_id: &str) -> Result<()> {
        let Some(dependent) = self.find(id) else {
            log::warn!("dependency {dependency_id:?} declared for unknown component type {id:?}");
            return Err(Error::unknown_component_type(id)
                .with_context(format!("declaring dependency on {dependency_id:?}")));
        };

        let dependency = self.component_type(dependency_id)?;
        let Some(data) = self.types.get_mut(dependent.index() as usize) else {
            return Err(Error::new(ErrorKind::Internal(format!(
                "hash index points past the end of the namespace: {dependent:?}"
            ))));
        };
        data.dependency = Some(dependency);
        log::debug!("component type {id:?} depends on {dependency_id:?}");
        Ok(())
    }

    /// Returns the dependency of `ty`, if one was registered.
    #[must_use]
    pub fn dependency_of(&self, ty: ComponentType) -> Option<ComponentType> {
        self.data(ty).and_then(ComponentTypeData::dependency)
    }

    /// Returns true if `dependent` directly depends on `dependency`.
    ///
    /// Not transitive.
    #[must_use]
    pub fn depends(&self, dependent: ComponentType, dependency: ComponentType) -> bool {
        self.dependency_of(dependent) == Some(dependency)
    }

    /// Forgets every interned type. Previously issued handles become dangling.
    pub fn clear(&mut self) {
        log::debug!("clearing {} component types", self.types.len());
        self.types.clear();
        self.by_hash.clear();
    }

    fn next_handle(&self) -> Result<ComponentType> {
        u32::try_from(self.types.len())
            .ok()
            .map(ComponentType::new)
            .filter(|ty| ty.is_valid())
            .ok_or_else(|| Error::new(ErrorKind::Internal("too many component types".to_string())))
    }
}

/// Serializable copy of a [`TypeNamespace`].
#[cfg(feature = "serde")]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceSnapshot {
    /// Identifier capacity in bytes.
    pub max_id_len: usize,
    /// Records in handle order.
    pub types: Vec<ComponentTypeData>,
}

#[cfg(feature = "serde")]
impl TypeNamespace {
    /// Captures the namespace so it can be restored with identical handles.
    #[must_use]
    pub fn to_snapshot(&self) -> NamespaceSnapshot {
        NamespaceSnapshot {
            max_id_len: self.max_id_len,
            types: self.types.clone(),
        }
    }

    /// Rebuilds a namespace from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if an identifier exceeds the snapshot's capacity, a
    /// record's hash does not match its identifier, two records share a hash,
    /// or a dependency points outside the snapshot.
    pub fn from_snapshot(snapshot: NamespaceSnapshot) -> Result<Self> {
        let count = snapshot.types.len();
        let mut by_hash = HashMap::with_capacity(count);

        for (ty, data) in (0u32..).map(ComponentType::new).zip(&snapshot.types) {
            if data.id.len() > snapshot.max_id_len {
                return Err(invalid_snapshot(format!(
                    "{:?} exceeds identifier capacity of {}",
                    data.id, snapshot.max_id_len
                )));
            }
            if name_hash(&data.id) != data.id_hash {
                return Err(invalid_snapshot(format!(
                    "hash mismatch for {:?}",
                    data.id
                )));
            }
            if let Some(dep) = data.dependency {
                if dep.index() as usize >= count {
                    return Err(invalid_snapshot(format!(
                        "dependency {dep:?} of {:?} is out of range",
                        data.id
                    )));
                }
            }
            if by_hash.insert(data.id_hash, ty).is_some() {
                return Err(invalid_snapshot(format!(
                    "duplicate hash for {:?}",
                    data.id
                )));
            }
        }

        Ok(Self {
            types: snapshot.types,
            by_hash,
            max_id_len: snapshot.max_id_len,
        })
    }
}

#[cfg(feature = "serde")]
fn invalid_snapshot(message: String) -> Error {
    Error::new(ErrorKind::InvalidSnapshot(message))
}

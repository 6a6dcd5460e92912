//! Integration tests for the init/shutdown lifecycle
//!
//! Tests single init, descriptor release on shutdown, and what survives
//! a shutdown/init cycle under each namespace lifetime.

use typereg_registry::{ErrorKind, NamespaceLifetime, Registry, RegistryConfig, name_hash};

use crate::support::{DropCounter, active_registry, property};

// =============================================================================
// Init / Shutdown Contract
// =============================================================================

#[test]
fn double_init_is_rejected() {
    let mut registry = active_registry(RegistryConfig::default());
    let err = registry.init().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::AlreadyInitialized));
}

#[test]
fn shutdown_before_init_is_rejected() {
    let mut registry = Registry::default();
    let err = registry.shutdown().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotInitialized));
}

#[test]
fn init_allowed_again_after_shutdown() {
    let mut registry = active_registry(RegistryConfig::default());
    registry.shutdown().unwrap();
    registry.init().unwrap();
    assert!(registry.is_initialized());
    registry.shutdown().unwrap();
    assert!(registry.shutdown().is_err());
}

// =============================================================================
// Descriptor Release
// =============================================================================

#[test]
fn every_descriptor_dropped_exactly_once() {
    let counter = DropCounter::new();
    let mut registry = active_registry(RegistryConfig::default());

    registry.add("transform", counter.property("position")).unwrap();
    registry.add("transform", counter.property("rotation")).unwrap();
    registry.add("transform", counter.property("scale")).unwrap();
    registry.add("light", counter.property("color")).unwrap();
    registry
        .add(
            "mesh",
            counter.group("material", vec![counter.property("albedo"), counter.property("normal")]),
        )
        .unwrap();
    let empty = registry.component_type("empty").unwrap();
    registry.descriptors_mut(empty).unwrap();

    assert_eq!(counter.drops(), 0);

    // Top-level descriptors owned by the registry
    let released = registry.shutdown().unwrap();
    assert_eq!(released, 5);
    // Five top-level descriptors plus two children owned by "material"
    assert_eq!(counter.drops(), 7);

    // Nothing left to release
    registry.init().unwrap();
    assert_eq!(registry.shutdown().unwrap(), 0);
    assert_eq!(counter.drops(), 7);
}

#[test]
fn dropping_an_active_registry_releases_descriptors() {
    let counter = DropCounter::new();
    {
        let mut registry = active_registry(RegistryConfig::default());
        registry.add("a", counter.property("x")).unwrap();
        registry.add("b", counter.property("y")).unwrap();
    }
    assert_eq!(counter.drops(), 2);
}

#[test]
fn descriptors_survive_until_shutdown() {
    let counter = DropCounter::new();
    let mut registry = active_registry(RegistryConfig::default());
    let ty = registry.add("a", counter.property("x")).unwrap();

    for _ in 0..3 {
        assert!(registry.descriptor(ty, name_hash("x")).unwrap().is_some());
    }
    assert_eq!(counter.drops(), 0);
}

// =============================================================================
// Shutdown / Init Cycles
// =============================================================================

#[test]
fn reinit_yields_empty_descriptor_lists() {
    let mut registry = active_registry(RegistryConfig::default());
    let ty = registry.add("transform", property("position")).unwrap();
    registry.shutdown().unwrap();
    registry.init().unwrap();

    assert!(registry.descriptors(ty).unwrap().is_empty());
    assert!(registry.descriptor(ty, name_hash("position")).unwrap().is_none());
}

#[test]
fn persistent_namespace_keeps_handles_across_cycles() {
    let mut registry = active_registry(RegistryConfig::default());
    assert_eq!(registry.config().namespace_lifetime, NamespaceLifetime::Persistent);

    let transform = registry.add("transform", property("position")).unwrap();
    let mesh = registry.add("mesh", property("source")).unwrap();
    registry.register_dependency("mesh", "transform").unwrap();
    registry.shutdown().unwrap();
    registry.init().unwrap();

    assert_eq!(registry.component_type_count(), 2);
    assert_eq!(registry.component_type("transform").unwrap(), transform);
    assert_eq!(registry.component_type("mesh").unwrap(), mesh);
    assert!(registry.depends(mesh, transform));
    assert_eq!(registry.component_type_count(), 2);
}

#[test]
fn per_session_namespace_restarts_handles() {
    let mut registry = active_registry(RegistryConfig::per_session());

    registry.add("transform", property("position")).unwrap();
    let mesh = registry.add("mesh", property("source")).unwrap();
    assert_eq!(mesh.index(), 1);
    registry.shutdown().unwrap();

    assert_eq!(registry.component_type_count(), 0);
    registry.init().unwrap();

    let mesh_again = registry.component_type("mesh").unwrap();
    assert_eq!(mesh_again.index(), 0);
    assert_eq!(registry.component_type_count(), 1);
    let err = registry.component_type_from_hash(name_hash("transform")).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownTypeHash(_)));
}

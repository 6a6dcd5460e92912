//! Integration tests for component type dependencies
//!
//! Tests one-to-one dependency edges between component types.

use typereg_registry::{ComponentType, ErrorKind, Registry};

use crate::support::{active_registry, property};

#[test]
fn dependency_after_property_registration() {
    let mut registry = active_registry(Default::default());
    let renderable = registry.add("renderable", property("source")).unwrap();

    registry.register_dependency("renderable", "transform").unwrap();

    let transform = registry.component_type("transform").unwrap();
    assert!(registry.depends(renderable, transform));
}

#[test]
fn only_the_registered_pair_depends() {
    let mut registry = Registry::default();
    let a = registry.component_type("a").unwrap();
    let b = registry.component_type("b").unwrap();
    let c = registry.component_type("c").unwrap();
    registry.register_dependency("a", "b").unwrap();

    let handles = [a, b, c, ComponentType::INVALID];
    for &x in &handles {
        for &y in &handles {
            assert_eq!(registry.depends(x, y), x == a && y == b, "{x:?} -> {y:?}");
        }
    }
}

#[test]
fn dependent_must_exist() {
    let mut registry = Registry::default();

    let err = registry.register_dependency("orphan", "transform").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownComponentType(_)));
    assert_eq!(registry.component_type_count(), 0);
}

#[test]
fn dependency_may_be_new() {
    let mut registry = Registry::default();
    registry.component_type("a").unwrap();
    assert_eq!(registry.component_type_count(), 1);

    registry.register_dependency("a", "brand_new").unwrap();
    assert_eq!(registry.component_type_count(), 2);
}

#[test]
fn dependency_does_not_need_session() {
    let mut registry = Registry::default();
    registry.component_type("a").unwrap();
    assert!(registry.register_dependency("a", "b").is_ok());
}

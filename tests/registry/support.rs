//! Descriptors and helpers shared by the registry tests.

use std::cell::Cell;
use std::rc::Rc;

use typereg_registry::{PropertyDescriptor, Registry, RegistryConfig, name_hash};

/// Descriptor that counts how many times it has been dropped.
pub struct Counted {
    hash: u32,
    children: Vec<Box<dyn PropertyDescriptor>>,
    drops: Rc<Cell<usize>>,
}

impl PropertyDescriptor for Counted {
    fn name_hash(&self) -> u32 {
        self.hash
    }

    fn children(&self) -> &[Box<dyn PropertyDescriptor>] {
        &self.children
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Builds descriptors sharing one drop counter.
#[derive(Clone, Default)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Box<dyn PropertyDescriptor> {
        self.group(name, Vec::new())
    }

    pub fn group(
        &self,
        name: &str,
        children: Vec<Box<dyn PropertyDescriptor>>,
    ) -> Box<dyn PropertyDescriptor> {
        Box::new(Counted {
            hash: name_hash(name),
            children,
            drops: Rc::clone(&self.0),
        })
    }

    pub fn drops(&self) -> usize {
        self.0.get()
    }
}

/// Plain descriptor without drop tracking.
pub fn property(name: &str) -> Box<dyn PropertyDescriptor> {
    DropCounter::new().property(name)
}

/// Returns an initialized registry with test logging enabled.
pub fn active_registry(config: RegistryConfig) -> Registry {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut registry = Registry::new(config);
    registry.init().unwrap();
    registry
}

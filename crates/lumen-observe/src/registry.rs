//! Observer Registry
//!
//! Every observer the page creates is registered here under a generated
//! id, so teardown can disconnect all of them in one `cleanup` call.
//! The registry is an owned value injected into the page controller,
//! not a global.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use lumen_dom::{DomTree, NodeId};
use tracing::debug;

use crate::{IntersectionEntry, IntersectionObserver, ObserverConfig, Viewport};

/// Registry-assigned observer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Shared handle to a registered observer
#[derive(Debug, Clone)]
pub struct ObserverHandle {
    id: ObserverId,
    inner: Rc<RefCell<IntersectionObserver>>,
}

impl ObserverHandle {
    /// Registry id of this observer
    pub fn id(&self) -> ObserverId {
        self.id
    }

    /// Start observing an element
    pub fn observe(&self, node: NodeId) {
        self.inner.borrow_mut().observe(node);
    }

    /// Stop observing an element
    pub fn unobserve(&self, node: NodeId) {
        self.inner.borrow_mut().unobserve(node);
    }

    /// Disconnect the observer entirely
    pub fn disconnect(&self) {
        self.inner.borrow_mut().disconnect();
    }

    /// Whether the observer is still connected
    pub fn is_connected(&self) -> bool {
        self.inner.borrow().is_connected()
    }

    /// Number of elements under observation
    pub fn observed_count(&self) -> usize {
        self.inner.borrow().observed_count()
    }

    /// Sample the observer (see `IntersectionObserver::take_entries`)
    pub fn take_entries(&self, tree: &DomTree, viewport: Viewport) -> Vec<IntersectionEntry> {
        self.inner.borrow_mut().take_entries(tree, viewport)
    }
}

/// Page-wide registry of live observers
#[derive(Debug, Default)]
pub struct ObserverRegistry {
    next_id: u64,
    observers: HashMap<ObserverId, Rc<RefCell<IntersectionObserver>>>,
}

impl ObserverRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { next_id: 1, observers: HashMap::new() }
    }

    /// Create and register a new observer
    pub fn create(&mut self, config: ObserverConfig) -> ObserverHandle {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        let inner = Rc::new(RefCell::new(IntersectionObserver::new(config)));
        self.observers.insert(id, Rc::clone(&inner));
        ObserverHandle { id, inner }
    }

    /// Disconnect and drop one observer, returning whether it existed
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        match self.observers.remove(&id) {
            Some(observer) => {
                observer.borrow_mut().disconnect();
                true
            }
            None => false,
        }
    }

    /// Disconnect every outstanding observer and empty the registry
    pub fn cleanup(&mut self) {
        let count = self.observers.len();
        for observer in self.observers.values() {
            observer.borrow_mut().disconnect();
        }
        self.observers.clear();
        debug!(count, "observer registry cleaned up");
    }

    /// Number of registered observers
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Whether the registry holds no observers
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_disconnects_all() {
        let mut registry = ObserverRegistry::new();
        let handles: Vec<_> = (0..4)
            .map(|_| registry.create(ObserverConfig::default()))
            .collect();
        assert_eq!(registry.len(), 4);

        registry.cleanup();
        assert!(registry.is_empty());
        for handle in &handles {
            assert!(!handle.is_connected());
        }
    }

    #[test]
    fn test_unregister() {
        let mut registry = ObserverRegistry::new();
        let handle = registry.create(ObserverConfig::default());
        assert!(registry.unregister(handle.id()));
        assert!(!registry.unregister(handle.id()));
        assert!(!handle.is_connected());
    }

    #[test]
    fn test_handles_stay_registered_until_disconnect() {
        let mut registry = ObserverRegistry::new();
        let mut tree = DomTree::new();
        let node = tree.create_element("div");
        tree.set_bounds(node, lumen_dom::Rect::new(0.0, 0.0, 10.0, 10.0));

        let handle = registry.create(ObserverConfig::default());
        handle.observe(node);
        assert_eq!(registry.len(), 1);

        // The registry sees the same observer the handle mutates
        registry.cleanup();
        assert_eq!(handle.observed_count(), 0);
    }
}

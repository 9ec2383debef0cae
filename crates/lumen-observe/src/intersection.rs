//! Intersection Observer
//!
//! Change-driven visibility sampling: `take_entries` reports only the
//! elements whose intersection state flipped since the previous sample.

use std::collections::HashMap;

use lumen_dom::{DomTree, NodeId};

use crate::Viewport;

/// Observer configuration
#[derive(Debug, Clone, Copy)]
pub struct ObserverConfig {
    /// Minimum visible-area fraction counting as intersecting
    pub threshold: f32,
    /// Margin expanding the viewport, in pixels (pre-trigger zone)
    pub root_margin: f32,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self { threshold: 0.0, root_margin: 0.0 }
    }
}

/// One observed element's state change
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub node: NodeId,
    pub ratio: f32,
    pub is_intersecting: bool,
}

/// Visibility observer over host-assigned element bounds
#[derive(Debug)]
pub struct IntersectionObserver {
    config: ObserverConfig,
    observed: Vec<NodeId>,
    state: HashMap<NodeId, bool>,
    connected: bool,
}

impl IntersectionObserver {
    /// Create a connected observer
    pub fn new(config: ObserverConfig) -> Self {
        Self {
            config,
            observed: Vec::new(),
            state: HashMap::new(),
            connected: true,
        }
    }

    /// Start observing an element; duplicates are ignored
    pub fn observe(&mut self, node: NodeId) {
        if self.connected && !self.observed.contains(&node) {
            self.observed.push(node);
        }
    }

    /// Stop observing an element
    pub fn unobserve(&mut self, node: NodeId) {
        self.observed.retain(|&n| n != node);
        self.state.remove(&node);
    }

    /// Stop observing everything and refuse further observation
    pub fn disconnect(&mut self) {
        self.observed.clear();
        self.state.clear();
        self.connected = false;
    }

    /// Whether the observer is still connected
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Number of elements under observation
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Sample all observed elements against the viewport, returning an
    /// entry for each whose intersection state changed. Elements resolve
    /// their rectangle through `effective_bounds`; those with none at
    /// all are skipped.
    pub fn take_entries(&mut self, tree: &DomTree, viewport: Viewport) -> Vec<IntersectionEntry> {
        if !self.connected {
            return Vec::new();
        }
        let vp = viewport.expand(self.config.root_margin);
        let mut entries = Vec::new();
        for &node in &self.observed {
            let Some(rect) = tree.effective_bounds(node) else {
                continue;
            };
            let ratio = vp.intersection_ratio(rect);
            let is_intersecting = if self.config.threshold > 0.0 {
                ratio >= self.config.threshold
            } else {
                ratio > 0.0
            };
            if self.state.get(&node).copied() != Some(is_intersecting) {
                self.state.insert(node, is_intersecting);
                entries.push(IntersectionEntry { node, ratio, is_intersecting });
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_dom::Rect;

    fn tree_with_element(y: f32) -> (DomTree, NodeId) {
        let mut tree = DomTree::new();
        let node = tree.create_element("div");
        tree.set_bounds(node, Rect::new(0.0, y, 100.0, 100.0));
        (tree, node)
    }

    #[test]
    fn test_entries_only_on_change() {
        let (tree, node) = tree_with_element(50.0);
        let mut observer = IntersectionObserver::new(ObserverConfig::default());
        observer.observe(node);

        let vp = Viewport::new(0.0, 0.0, 800.0, 600.0);
        let first = observer.take_entries(&tree, vp);
        assert_eq!(first.len(), 1);
        assert!(first[0].is_intersecting);

        // Unchanged state stays silent
        assert!(observer.take_entries(&tree, vp).is_empty());

        // Scrolling the element out flips the state once
        let scrolled = Viewport::new(0.0, 1000.0, 800.0, 600.0);
        let second = observer.take_entries(&tree, scrolled);
        assert_eq!(second.len(), 1);
        assert!(!second[0].is_intersecting);
    }

    #[test]
    fn test_threshold() {
        let (tree, node) = tree_with_element(550.0);
        let mut observer = IntersectionObserver::new(ObserverConfig {
            threshold: 0.5,
            root_margin: 0.0,
        });
        observer.observe(node);

        // Half the element is past the viewport bottom: ratio 0.5 meets
        // the threshold exactly
        let vp = Viewport::new(0.0, 0.0, 800.0, 600.0);
        let entries = observer.take_entries(&tree, vp);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_intersecting);
    }

    #[test]
    fn test_root_margin_pre_trigger() {
        let (tree, node) = tree_with_element(650.0);
        let mut observer = IntersectionObserver::new(ObserverConfig {
            threshold: 0.0,
            root_margin: 100.0,
        });
        observer.observe(node);

        // 50px below the viewport, inside the 100px margin
        let vp = Viewport::new(0.0, 0.0, 800.0, 600.0);
        let entries = observer.take_entries(&tree, vp);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_intersecting);
    }

    #[test]
    fn test_disconnect() {
        let (tree, node) = tree_with_element(0.0);
        let mut observer = IntersectionObserver::new(ObserverConfig::default());
        observer.observe(node);
        observer.disconnect();

        assert!(!observer.is_connected());
        assert_eq!(observer.observed_count(), 0);
        let vp = Viewport::new(0.0, 0.0, 800.0, 600.0);
        assert!(observer.take_entries(&tree, vp).is_empty());

        // A disconnected observer refuses new work
        observer.observe(node);
        assert_eq!(observer.observed_count(), 0);
    }
}

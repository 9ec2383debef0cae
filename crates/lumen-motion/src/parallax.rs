//! Parallax Layers
//!
//! Registered elements translate against the scroll position by a
//! per-element speed factor. Disabled entirely under reduced motion.

use lumen_dom::{DomTree, NodeId};

use crate::MotionConfig;

/// Scroll-linked parallax coordinator
#[derive(Debug)]
pub struct ParallaxController {
    layers: Vec<(NodeId, f32)>,
    enabled: bool,
}

impl ParallaxController {
    /// Create a controller honoring the captured motion preference
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            layers: Vec::new(),
            enabled: !config.reduced_motion,
        }
    }

    /// Register an element with its speed factor
    pub fn register(&mut self, node: NodeId, speed: f32) {
        if node.is_valid() {
            self.layers.push((node, speed));
        }
    }

    /// Register every child of a container with alternating speeds
    pub fn register_children(&mut self, tree: &DomTree, container: NodeId, speeds: &[f32]) {
        if speeds.is_empty() {
            return;
        }
        for (i, child) in tree.children(container).enumerate() {
            self.register(child, speeds[i % speeds.len()]);
        }
    }

    /// Number of registered layers
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Apply offsets for the given scroll position
    pub fn apply(&self, tree: &mut DomTree, scroll_y: f32) {
        if !self.enabled {
            return;
        }
        for &(node, speed) in &self.layers {
            let offset = -scroll_y * speed;
            tree.set_style(node, "transform", &format!("translateY({offset:.1}px)"));
        }
    }
}

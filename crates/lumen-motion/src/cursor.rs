//! Cursor Follow
//!
//! A visual cursor proxy trails the raw pointer by a fixed
//! interpolation factor per frame. Fine-pointer environments only;
//! under reduced motion the proxy snaps instead of trailing.

use lumen_dom::{DomTree, NodeId};

use crate::MotionConfig;

/// Per-frame interpolation factor toward the raw pointer
pub const CURSOR_LERP: f32 = 0.2;

/// Trailing cursor proxy
#[derive(Debug)]
pub struct CursorFollow {
    enabled: bool,
    snap: bool,
    node: NodeId,
    raw: (f32, f32),
    proxy: (f32, f32),
    hover_classes: Vec<String>,
}

impl CursorFollow {
    /// Create the proxy for the given cursor element
    pub fn new(config: &MotionConfig, node: NodeId, hover_classes: &[&str]) -> Self {
        Self {
            enabled: config.has_fine_pointer() && node.is_valid(),
            snap: config.reduced_motion,
            node,
            raw: (0.0, 0.0),
            proxy: (0.0, 0.0),
            hover_classes: hover_classes.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Whether the proxy is active in this environment
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the raw pointer position
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.raw = (x, y);
    }

    /// Toggle the hover state from the element under the pointer
    pub fn on_pointer_over(&mut self, tree: &mut DomTree, target: NodeId) {
        if !self.enabled {
            return;
        }
        let hovering = self
            .hover_classes
            .iter()
            .any(|class| tree.has_class(target, class));
        if hovering {
            tree.add_class(self.node, "cursor-hover");
        } else {
            tree.remove_class(self.node, "cursor-hover");
        }
    }

    /// Move the proxy one frame toward the raw position
    pub fn update(&mut self, tree: &mut DomTree) {
        if !self.enabled {
            return;
        }
        if self.snap {
            self.proxy = self.raw;
        } else {
            self.proxy.0 += (self.raw.0 - self.proxy.0) * CURSOR_LERP;
            self.proxy.1 += (self.raw.1 - self.proxy.1) * CURSOR_LERP;
        }
        tree.set_style(self.node, "left", &format!("{:.1}px", self.proxy.0));
        tree.set_style(self.node, "top", &format!("{:.1}px", self.proxy.1));
    }

    /// Current proxy position
    pub fn position(&self) -> (f32, f32) {
        self.proxy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PointerCapability;

    fn setup() -> (DomTree, NodeId) {
        let mut tree = DomTree::new();
        let cursor = tree.create_element("div");
        (tree, cursor)
    }

    #[test]
    fn test_trailing_approach() {
        let (mut tree, node) = setup();
        let mut cursor = CursorFollow::new(&MotionConfig::default(), node, &["cta-primary"]);
        cursor.on_pointer_move(100.0, 0.0);

        cursor.update(&mut tree);
        let (x1, _) = cursor.position();
        assert!((x1 - 20.0).abs() < 1e-4);

        cursor.update(&mut tree);
        let (x2, _) = cursor.position();
        assert!(x2 > x1 && x2 < 100.0);
        assert_eq!(tree.style(node, "left").map(str::to_string), Some(format!("{x2:.1}px")));
    }

    #[test]
    fn test_touch_environment_disabled() {
        let (mut tree, node) = setup();
        let config = MotionConfig {
            pointer: PointerCapability::CoarseOnly,
            ..Default::default()
        };
        let mut cursor = CursorFollow::new(&config, node, &[]);
        assert!(!cursor.is_enabled());

        cursor.on_pointer_move(100.0, 100.0);
        cursor.update(&mut tree);
        assert_eq!(tree.style(node, "left"), None);
    }

    #[test]
    fn test_reduced_motion_snaps() {
        let (mut tree, node) = setup();
        let config = MotionConfig { reduced_motion: true, ..Default::default() };
        let mut cursor = CursorFollow::new(&config, node, &[]);
        cursor.on_pointer_move(100.0, 50.0);
        cursor.update(&mut tree);
        assert_eq!(cursor.position(), (100.0, 50.0));
    }

    #[test]
    fn test_hover_class() {
        let (mut tree, node) = setup();
        let button = tree.create_element("a");
        tree.add_class(button, "cta-primary");
        let plain = tree.create_element("p");

        let mut cursor = CursorFollow::new(&MotionConfig::default(), node, &["cta-primary"]);
        cursor.on_pointer_over(&mut tree, button);
        assert!(tree.has_class(node, "cursor-hover"));
        cursor.on_pointer_over(&mut tree, plain);
        assert!(!tree.has_class(node, "cursor-hover"));
    }
}

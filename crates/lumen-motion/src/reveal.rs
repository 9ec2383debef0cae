//! Reveal on Scroll
//!
//! Elements flagged with the `reveal` class are marked `active` on
//! their first intersection with the (margin-expanded) viewport.
//! Observation is one-directional: scrolling back out never un-marks.

use lumen_dom::{DomTree, NodeId};
use lumen_observe::{ObserverConfig, ObserverHandle, ObserverRegistry, Viewport};
use tracing::debug;

use crate::MotionConfig;

/// Minimum visible fraction that triggers a reveal
pub const REVEAL_THRESHOLD: f32 = 0.1;
/// Pre-trigger margin: reveals fire this many pixels before entry
pub const REVEAL_MARGIN_PX: f32 = 100.0;
/// Transition delay per stagger index step
pub const STAGGER_STEP_MS: u32 = 100;

/// Scroll-reveal coordinator
#[derive(Debug)]
pub struct RevealController {
    handle: ObserverHandle,
    reduced_motion: bool,
}

impl RevealController {
    /// Create a controller with its observer registered for teardown
    pub fn new(registry: &mut ObserverRegistry, config: &MotionConfig) -> Self {
        let handle = registry.create(ObserverConfig {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_MARGIN_PX,
        });
        Self {
            handle,
            reduced_motion: config.reduced_motion,
        }
    }

    /// Observe every element under `root` flagged for reveal
    pub fn discover(&self, tree: &DomTree, root: NodeId) {
        let flagged = tree.get_elements_by_class_name(root, "reveal");
        debug!(count = flagged.len(), "reveal elements discovered");
        for node in flagged {
            self.handle.observe(node);
        }
    }

    /// Observe a single element
    pub fn observe(&self, node: NodeId) {
        self.handle.observe(node);
    }

    /// Sample the observer and activate newly visible elements,
    /// returning how many were activated this pass
    pub fn update(&self, tree: &mut DomTree, viewport: Viewport) -> usize {
        let entries = self.handle.take_entries(tree, viewport);
        let mut activated = 0;
        for entry in entries {
            if !entry.is_intersecting || tree.has_class(entry.node, "active") {
                continue;
            }
            tree.add_class(entry.node, "active");
            activated += 1;

            if self.reduced_motion {
                continue;
            }
            if let Some(index) = tree.data(entry.node, "index").and_then(|s| s.parse::<u32>().ok())
            {
                let delay = index * STAGGER_STEP_MS;
                tree.set_style(entry.node, "transition-delay", &format!("{delay}ms"));
            }
        }
        activated
    }
}

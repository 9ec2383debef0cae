//! Counter Animation
//!
//! Stat counters animate from zero once their element crosses half
//! visibility, then unobserve. One run per element, never re-triggered.

use std::collections::HashMap;

use lumen_dom::{DomTree, NodeId};
use lumen_observe::{ObserverConfig, ObserverHandle, ObserverRegistry, Viewport};
use tracing::debug;

use crate::{Animator, MotionConfig};

/// Visibility fraction that starts a counter
pub const COUNTER_THRESHOLD: f32 = 0.5;
/// Default counting duration
pub const DEFAULT_COUNT_DURATION_MS: f64 = 2000.0;

#[derive(Debug)]
struct PendingCounter {
    target: i64,
    suffix: String,
}

/// Visibility-triggered counter coordinator
#[derive(Debug)]
pub struct CounterController {
    handle: ObserverHandle,
    pending: HashMap<NodeId, PendingCounter>,
    duration_ms: f64,
}

impl CounterController {
    /// Create a controller with its observer registered for teardown
    pub fn new(registry: &mut ObserverRegistry, _config: &MotionConfig) -> Self {
        let handle = registry.create(ObserverConfig {
            threshold: COUNTER_THRESHOLD,
            root_margin: 0.0,
        });
        Self {
            handle,
            pending: HashMap::new(),
            duration_ms: DEFAULT_COUNT_DURATION_MS,
        }
    }

    /// Override the counting duration
    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Register every stat-number slot under `root` that carries a
    /// numeric target
    pub fn discover(&mut self, tree: &DomTree, root: NodeId) {
        for node in tree.query_selector_all(root, ".stat-number") {
            let Some(target) = tree.data(node, "target").and_then(|s| s.parse::<i64>().ok())
            else {
                continue;
            };
            let suffix = tree.data(node, "suffix").unwrap_or("").to_string();
            self.register(node, target, &suffix);
        }
        debug!(count = self.pending.len(), "counters registered");
    }

    /// Register a single counter slot
    pub fn register(&mut self, node: NodeId, target: i64, suffix: &str) {
        self.pending.insert(
            node,
            PendingCounter { target, suffix: suffix.to_string() },
        );
        self.handle.observe(node);
    }

    /// Number of counters waiting for visibility
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Sample visibility and start counters that crossed the threshold
    pub fn update(
        &mut self,
        tree: &mut DomTree,
        viewport: Viewport,
        animator: &mut Animator,
        now_ms: f64,
    ) {
        let entries = self.handle.take_entries(tree, viewport);
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            let Some(counter) = self.pending.remove(&entry.node) else {
                continue;
            };
            // One-shot: stop observing before the run starts
            self.handle.unobserve(entry.node);
            animator.count_to(
                entry.node,
                counter.target,
                &counter.suffix,
                now_ms,
                self.duration_ms,
            );
        }
    }
}

//! Overlay Widgets
//!
//! Ad-hoc widgets outside the templated sections: notification toasts
//! with auto-dismiss, the blocking error modal and the loading spinner.

use std::collections::HashMap;

use lumen_dom::{DomTree, ElementBuilder, NodeId};
use lumen_sched::{TimerId, TimerQueue};
use tracing::debug;

/// Default toast lifetime before auto-dismiss
pub const TOAST_DURATION_MS: f64 = 4000.0;

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

/// Dismissible notification toasts with auto-dismiss timers
#[derive(Debug)]
pub struct ToastManager {
    container: NodeId,
    active: HashMap<TimerId, NodeId>,
    duration_ms: f64,
}

impl ToastManager {
    /// Create a manager appending into the given overlay container
    pub fn new(container: NodeId) -> Self {
        Self {
            container,
            active: HashMap::new(),
            duration_ms: TOAST_DURATION_MS,
        }
    }

    /// Override the auto-dismiss lifetime
    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Show a toast and schedule its auto-dismiss. Returns the toast
    /// node, or `NodeId::NONE` when the overlay container is missing.
    pub fn show(
        &mut self,
        tree: &mut DomTree,
        timers: &mut TimerQueue,
        kind: ToastKind,
        message: &str,
        now_ms: f64,
    ) -> NodeId {
        if tree.element(self.container).is_none() {
            debug!("toast skipped: overlay container missing");
            return NodeId::NONE;
        }
        let toast = ElementBuilder::new("div")
            .classes(["toast", kind.class()])
            .child(ElementBuilder::new("span").class("toast-message").text(message))
            .child(ElementBuilder::new("button").class("toast-close").text("\u{00d7}"))
            .build(tree);
        let _ = tree.append_child(self.container, toast);

        let timer = timers.schedule(now_ms + self.duration_ms);
        self.active.insert(timer, toast);
        toast
    }

    /// Map fired timers back to the toasts due for dismissal
    pub fn collect_expired(&mut self, fired: &[TimerId]) -> Vec<NodeId> {
        fired
            .iter()
            .filter_map(|timer| self.active.remove(timer))
            .collect()
    }

    /// Dismiss a toast early (close button), cancelling its timer.
    /// Returns whether the toast was still active.
    pub fn dismiss(&mut self, timers: &mut TimerQueue, toast: NodeId) -> bool {
        let Some(timer) = self
            .active
            .iter()
            .find_map(|(timer, node)| (*node == toast).then_some(*timer))
        else {
            return false;
        };
        self.active.remove(&timer);
        timers.cancel(timer);
        true
    }

    /// Number of live toasts
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

/// Blocking error modal with a reload action
#[derive(Debug, Clone, Copy)]
pub struct Modal {
    pub root: NodeId,
    pub reload_button: NodeId,
}

/// Build and attach a blocking error modal
pub fn build_error_modal(tree: &mut DomTree, body: NodeId, title: &str, message: &str) -> Modal {
    let root = ElementBuilder::new("div")
        .classes(["modal-overlay", "active"])
        .child(
            ElementBuilder::new("div")
                .class("modal")
                .child(ElementBuilder::new("h2").class("modal-title").text(title))
                .child(ElementBuilder::new("p").class("modal-message").text(message))
                .child(
                    ElementBuilder::new("button")
                        .classes(["modal-reload", "cta-primary"])
                        .text("Reload"),
                ),
        )
        .build(tree);
    let _ = tree.append_child(body, root);
    let reload_button = tree
        .query_selector(root, ".modal-reload")
        .unwrap_or(NodeId::NONE);
    Modal { root, reload_button }
}

/// Build a detached loading spinner
pub fn build_spinner(tree: &mut DomTree) -> NodeId {
    ElementBuilder::new("div")
        .class("spinner")
        .child(ElementBuilder::new("div").class("spinner-ring"))
        .build(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let mut tree = DomTree::new();
        let container = tree.create_element("div");
        let mut timers = TimerQueue::new();
        let mut toasts = ToastManager::new(container);

        let toast = toasts.show(&mut tree, &mut timers, ToastKind::Success, "Sent!", 0.0);
        assert!(toast.is_valid());
        assert_eq!(toasts.active_count(), 1);
        assert_eq!(tree.children(container).count(), 1);

        let fired = timers.fire(TOAST_DURATION_MS);
        let expired = toasts.collect_expired(&fired);
        assert_eq!(expired, vec![toast]);
        assert_eq!(toasts.active_count(), 0);
    }

    #[test]
    fn test_toast_manual_dismiss_cancels_timer() {
        let mut tree = DomTree::new();
        let container = tree.create_element("div");
        let mut timers = TimerQueue::new();
        let mut toasts = ToastManager::new(container);

        let toast = toasts.show(&mut tree, &mut timers, ToastKind::Error, "Failed", 0.0);
        assert!(toasts.dismiss(&mut timers, toast));
        assert!(!toasts.dismiss(&mut timers, toast));
        assert!(timers.fire(TOAST_DURATION_MS).is_empty());
    }

    #[test]
    fn test_toast_missing_container() {
        let mut tree = DomTree::new();
        let mut timers = TimerQueue::new();
        let mut toasts = ToastManager::new(NodeId::NONE);

        let toast = toasts.show(&mut tree, &mut timers, ToastKind::Info, "Hi", 0.0);
        assert!(!toast.is_valid());
        assert!(timers.is_empty());
    }

    #[test]
    fn test_error_modal() {
        let mut tree = DomTree::new();
        let body = tree.create_element("body");
        let modal = build_error_modal(&mut tree, body, "Load failed", "Content unavailable.");

        assert!(tree.has_class(modal.root, "active"));
        assert!(modal.reload_button.is_valid());
        let title = tree.query_selector(modal.root, ".modal-title").unwrap();
        assert_eq!(tree.text_content(title), "Load failed");
    }
}

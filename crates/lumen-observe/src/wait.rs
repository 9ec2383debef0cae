//! Element Waiter
//!
//! Opt-in polling lookup: resolves once a selector matches, fails with
//! an explicit error after the timeout.

use lumen_dom::{DomTree, NodeId};
use thiserror::Error;

/// Waiter failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitError {
    /// The deadline passed with no match
    #[error("timed out waiting for selector `{0}`")]
    TimedOut(String),
}

/// Poll outcome while the deadline has not passed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitPoll {
    Found(NodeId),
    Pending,
}

/// Deadline-bound selector lookup
#[derive(Debug)]
pub struct ElementWaiter {
    selector: String,
    deadline_ms: f64,
}

impl ElementWaiter {
    /// Create a waiter expiring `timeout_ms` after `now_ms`
    pub fn new(selector: &str, now_ms: f64, timeout_ms: f64) -> Self {
        Self {
            selector: selector.to_string(),
            deadline_ms: now_ms + timeout_ms,
        }
    }

    /// Check for a match; times out only when polled past the deadline
    pub fn poll(&self, tree: &DomTree, root: NodeId, now_ms: f64) -> Result<WaitPoll, WaitError> {
        if let Some(node) = tree.query_selector(root, &self.selector) {
            return Ok(WaitPoll::Found(node));
        }
        if now_ms >= self.deadline_ms {
            return Err(WaitError::TimedOut(self.selector.clone()));
        }
        Ok(WaitPoll::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waiter_resolves_late_element() {
        let mut tree = DomTree::new();
        let root = tree.create_element("body");
        let waiter = ElementWaiter::new(".late", 0.0, 500.0);

        assert_eq!(waiter.poll(&tree, root, 100.0), Ok(WaitPoll::Pending));

        let late = tree.create_element("div");
        tree.add_class(late, "late");
        tree.append_child(root, late).unwrap();

        assert_eq!(waiter.poll(&tree, root, 200.0), Ok(WaitPoll::Found(late)));
    }

    #[test]
    fn test_waiter_times_out() {
        let mut tree = DomTree::new();
        let root = tree.create_element("body");
        let waiter = ElementWaiter::new(".never", 0.0, 500.0);

        assert_eq!(
            waiter.poll(&tree, root, 500.0),
            Err(WaitError::TimedOut(".never".to_string()))
        );
    }
}

//! Document - High-level document API

use crate::{DomTree, NodeId};

/// A page document: the tree plus its cached body root
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Cached reference to the body element
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new document with an empty body
    pub fn new() -> Self {
        let mut tree = DomTree::new();
        let body = tree.create_element("body");
        Self { tree, body }
    }

    /// Get the body element
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Get element by ID, searching the whole document
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        if self.tree.attr(self.body, "id") == Some(id) {
            return Some(self.body);
        }
        self.tree
            .descendants(self.body)
            .into_iter()
            .find(|&node| self.tree.attr(node, "id") == Some(id))
    }

    /// First element matching a selector, rooted at the body
    pub fn query(&self, selector: &str) -> Option<NodeId> {
        self.tree.query_selector(self.body, selector)
    }

    /// All elements matching a selector, rooted at the body
    pub fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.tree.query_selector_all(self.body, selector)
    }
}

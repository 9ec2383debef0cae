//! DOM Tree (arena-based allocation)
//!
//! Structural operations return `DomResult`; the class/attribute/text
//! helper layer silently no-ops on missing nodes, matching the rule
//! that an absent optional target is not an error.

use thiserror::Error;
use tracing::trace;

use crate::{Node, NodeData, NodeId, Rect};

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomError {
    /// Node not found
    #[error("node not found")]
    NotFound,
    /// Hierarchy error (e.g. inserting an ancestor into its descendant)
    #[error("hierarchy request error")]
    HierarchyRequest,
    /// Reference node is not a child of the given parent
    #[error("node is not a child of the given parent")]
    NotAChild,
}

/// Arena-based DOM tree
#[derive(Debug, Default)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new empty DOM tree
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if !id.is_valid() {
            return None;
        }
        self.nodes.get_mut(id.index())
    }

    /// Get element data if the node exists and is an element
    pub fn element(&self, id: NodeId) -> Option<&crate::ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    /// Get mutable element data
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut crate::ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    /// Number of nodes in the arena (detached nodes included)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // === Construction ===

    /// Create a detached element node
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::element(tag))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.alloc(Node::text(content))
    }

    // === Structural operations ===

    /// Append a child node, detaching it from its current parent first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.check_insertion(parent, child)?;
        self.detach(child);

        let prev = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = NodeId::NONE;
        }
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
        Ok(child)
    }

    /// Insert before a reference node; `None` appends at the end
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        new_child: NodeId,
        ref_child: Option<NodeId>,
    ) -> DomResult<NodeId> {
        let Some(anchor) = ref_child else {
            return self.append_child(parent, new_child);
        };
        self.check_insertion(parent, new_child)?;
        if self.get(anchor).map(|n| n.parent) != Some(parent) {
            return Err(DomError::NotAChild);
        }
        self.detach(new_child);

        let prev = self.nodes[anchor.index()].prev_sibling;
        {
            let node = &mut self.nodes[new_child.index()];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = anchor;
        }
        self.nodes[anchor.index()].prev_sibling = new_child;
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = new_child;
        } else {
            self.nodes[parent.index()].first_child = new_child;
        }
        Ok(new_child)
    }

    fn check_insertion(&self, parent: NodeId, child: NodeId) -> DomResult<()> {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return Err(DomError::NotFound);
        }
        // Inserting a node into itself or its own subtree breaks the tree
        let mut cursor = parent;
        while cursor.is_valid() {
            if cursor == child {
                return Err(DomError::HierarchyRequest);
            }
            cursor = self.nodes[cursor.index()].parent;
        }
        Ok(())
    }

    /// Unlink a node from its parent; no-op for missing or detached nodes
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else { return };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Null-safe removal helper; detaching is all removal means here
    pub fn remove(&mut self, id: NodeId) {
        if self.get(id).is_none() {
            trace!(?id, "remove on missing node ignored");
            return;
        }
        self.detach(id);
    }

    /// Detach every child of a container
    pub fn clear_children(&mut self, parent: NodeId) {
        loop {
            let Some(first) = self.get(parent).map(|n| n.first_child) else {
                return;
            };
            if !first.is_valid() {
                return;
            }
            self.detach(first);
        }
    }

    /// Deep structural clone; the clone is detached, the source untouched
    pub fn clone_subtree(&mut self, src: NodeId) -> DomResult<NodeId> {
        let data = self.get(src).ok_or(DomError::NotFound)?.data.clone();
        let copy = self.alloc(Node::with_data(data));
        let children: Vec<NodeId> = self.children(src).collect();
        for child in children {
            let cloned = self.clone_subtree(child)?;
            self.append_child(copy, cloned)?;
        }
        Ok(copy)
    }

    // === Traversal ===

    /// Iterate direct children in order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE),
        }
    }

    /// All descendants of a node in document (pre-) order, root excluded
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(root, &mut out);
        out
    }

    fn collect_descendants(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for child in self.children(id) {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }

    // === Class helpers (null-safe) ===

    /// Add a class; no-op when the node is missing or already carries it
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(elem) = self.element_mut(id) {
            if !elem.has_class(class) {
                elem.classes.push(class.to_string());
            }
        }
    }

    /// Remove a class; no-op when missing
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(elem) = self.element_mut(id) {
            elem.classes.retain(|c| c != class);
        }
    }

    /// Toggle a class, returning the new membership (false for missing nodes)
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        let Some(elem) = self.element_mut(id) else {
            return false;
        };
        if elem.has_class(class) {
            elem.classes.retain(|c| c != class);
            false
        } else {
            elem.classes.push(class.to_string());
            true
        }
    }

    /// Check class membership (false for missing nodes)
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }

    // === Attribute helpers (null-safe) ===

    /// Set an attribute; stores the id attribute in the cached id slot
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(elem) = self.element_mut(id) {
            if name == "id" {
                elem.id = Some(value.to_string());
            } else {
                elem.set_attr(name, value);
            }
        }
    }

    /// Get an attribute value
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        let elem = self.element(id)?;
        if name == "id" {
            elem.id.as_deref()
        } else {
            elem.get_attr(name)
        }
    }

    /// Set a data-* attribute by bare key
    pub fn set_data(&mut self, id: NodeId, key: &str, value: &str) {
        self.set_attr(id, &format!("data-{key}"), value);
    }

    /// Get a data-* attribute by bare key
    pub fn data(&self, id: NodeId, key: &str) -> Option<&str> {
        let elem = self.element(id)?;
        elem.get_attr(&format!("data-{key}"))
    }

    // === Style helpers (null-safe) ===

    /// Set an inline style property
    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some(elem) = self.element_mut(id) {
            elem.set_style(property, value);
        }
    }

    /// Get an inline style property
    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.element(id)?.get_style(property)
    }

    /// Remove an inline style property
    pub fn remove_style(&mut self, id: NodeId, property: &str) {
        if let Some(elem) = self.element_mut(id) {
            elem.styles.retain(|s| s.name != property);
        }
    }

    // === Text helpers ===

    /// Replace all children with a single text node
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        if self.element(id).is_none() {
            return;
        }
        self.clear_children(id);
        let node = self.create_text(text);
        // Insertion cannot fail: both ids were just validated
        let _ = self.append_child(id, node);
    }

    /// Concatenated text of the node and its descendants
    pub fn text_content(&self, id: NodeId) -> String {
        let Some(node) = self.get(id) else {
            return String::new();
        };
        if let Some(text) = node.as_text() {
            return text.to_string();
        }
        let mut out = String::new();
        for desc in self.descendants(id) {
            if let Some(NodeData::Text(t)) = self.get(desc).map(|n| &n.data) {
                out.push_str(&t.content);
            }
        }
        out
    }

    // === Geometry (headless layout stand-in) ===

    /// Assign layout bounds for an element
    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(elem) = self.element_mut(id) {
            elem.bounds = Some(bounds);
        }
    }

    /// Layout bounds, if the host assigned any
    pub fn bounds(&self, id: NodeId) -> Option<Rect> {
        self.element(id)?.bounds
    }

    /// Bounds of the node, falling back to the nearest ancestor that
    /// carries any (layout containment stand-in)
    pub fn effective_bounds(&self, id: NodeId) -> Option<Rect> {
        let mut cursor = id;
        while cursor.is_valid() {
            if let Some(bounds) = self.element(cursor).and_then(|e| e.bounds) {
                return Some(bounds);
            }
            cursor = self.get(cursor)?.parent;
        }
        None
    }
}

/// Ordered iterator over a node's direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let current = self.next;
        self.next = self
            .tree
            .get(current)
            .map(|n| n.next_sibling)
            .unwrap_or(NodeId::NONE);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_children() {
        let mut tree = DomTree::new();
        let parent = tree.create_element("div");
        let a = tree.create_element("span");
        let b = tree.create_element("span");

        tree.append_child(parent, a).unwrap();
        tree.append_child(parent, b).unwrap();

        let children: Vec<_> = tree.children(parent).collect();
        assert_eq!(children, vec![a, b]);
    }

    #[test]
    fn test_insert_before() {
        let mut tree = DomTree::new();
        let parent = tree.create_element("ul");
        let first = tree.create_element("li");
        let second = tree.create_element("li");
        tree.append_child(parent, second).unwrap();
        tree.insert_before(parent, first, Some(second)).unwrap();

        let children: Vec<_> = tree.children(parent).collect();
        assert_eq!(children, vec![first, second]);
    }

    #[test]
    fn test_detach_relinks_siblings() {
        let mut tree = DomTree::new();
        let parent = tree.create_element("div");
        let a = tree.create_element("i");
        let b = tree.create_element("i");
        let c = tree.create_element("i");
        for id in [a, b, c] {
            tree.append_child(parent, id).unwrap();
        }

        tree.detach(b);
        let children: Vec<_> = tree.children(parent).collect();
        assert_eq!(children, vec![a, c]);
        assert!(!tree.get(b).unwrap().parent.is_valid());
    }

    #[test]
    fn test_hierarchy_guard() {
        let mut tree = DomTree::new();
        let outer = tree.create_element("div");
        let inner = tree.create_element("div");
        tree.append_child(outer, inner).unwrap();

        assert_eq!(
            tree.append_child(inner, outer),
            Err(DomError::HierarchyRequest)
        );
        assert_eq!(
            tree.append_child(outer, outer),
            Err(DomError::HierarchyRequest)
        );
    }

    #[test]
    fn test_clone_subtree_is_detached_copy() {
        let mut tree = DomTree::new();
        let card = tree.create_element("div");
        tree.add_class(card, "card");
        let label = tree.create_element("span");
        tree.append_child(card, label).unwrap();
        tree.set_text(label, "hello");

        let copy = tree.clone_subtree(card).unwrap();
        assert_ne!(copy, card);
        assert!(!tree.get(copy).unwrap().parent.is_valid());
        assert!(tree.has_class(copy, "card"));
        assert_eq!(tree.text_content(copy), "hello");

        // Mutating the clone leaves the source untouched
        let copy_label = tree.children(copy).next().unwrap();
        tree.set_text(copy_label, "changed");
        assert_eq!(tree.text_content(card), "hello");
    }

    #[test]
    fn test_helpers_null_safe() {
        let mut tree = DomTree::new();

        tree.add_class(NodeId::NONE, "x");
        tree.remove_class(NodeId::NONE, "x");
        tree.set_attr(NodeId::NONE, "a", "1");
        tree.set_text(NodeId::NONE, "t");
        tree.remove(NodeId::NONE);
        assert!(!tree.toggle_class(NodeId::NONE, "x"));
        assert!(!tree.has_class(NodeId::NONE, "x"));
        assert_eq!(tree.text_content(NodeId::NONE), "");
        assert!(tree.is_empty());
    }

    #[test]
    fn test_toggle_class() {
        let mut tree = DomTree::new();
        let node = tree.create_element("nav");
        assert!(tree.toggle_class(node, "open"));
        assert!(tree.has_class(node, "open"));
        assert!(!tree.toggle_class(node, "open"));
        assert!(!tree.has_class(node, "open"));
    }

    #[test]
    fn test_set_text_replaces_children() {
        let mut tree = DomTree::new();
        let node = tree.create_element("p");
        tree.set_text(node, "one");
        tree.set_text(node, "two");
        assert_eq!(tree.text_content(node), "two");
        assert_eq!(tree.children(node).count(), 1);
    }

    #[test]
    fn test_effective_bounds_inherit() {
        let mut tree = DomTree::new();
        let card = tree.create_element("div");
        let slot = tree.create_element("span");
        tree.append_child(card, slot).unwrap();

        assert_eq!(tree.effective_bounds(slot), None);
        let rect = Rect::new(0.0, 100.0, 200.0, 50.0);
        tree.set_bounds(card, rect);
        assert_eq!(tree.effective_bounds(slot), Some(rect));
        assert_eq!(tree.bounds(slot), None);
    }

    #[test]
    fn test_data_attributes() {
        let mut tree = DomTree::new();
        let node = tree.create_element("div");
        tree.set_data(node, "index", "2");
        assert_eq!(tree.data(node, "index"), Some("2"));
        assert_eq!(tree.attr(node, "data-index"), Some("2"));
    }
}

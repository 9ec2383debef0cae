//! Element Queries
//!
//! Simple selector parsing and tree queries. Query results are concrete
//! ordered vectors in document order, never live views.

use crate::{DomTree, ElementData, NodeId};

/// Simple selector for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    Universal,
}

impl SimpleSelector {
    /// Parse a simple selector string
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if s == "*" {
            Some(Self::Universal)
        } else if let Some(id) = s.strip_prefix('#') {
            Some(Self::Id(id.to_string()))
        } else if let Some(class) = s.strip_prefix('.') {
            Some(Self::Class(class.to_string()))
        } else {
            Some(Self::Tag(s.to_lowercase()))
        }
    }

    /// Check whether an element matches this selector
    pub fn matches(&self, elem: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => elem.tag.eq_ignore_ascii_case(tag),
            Self::Id(id) => elem.id.as_deref() == Some(id),
            Self::Class(class) => elem.has_class(class),
        }
    }
}

impl DomTree {
    /// First descendant of `root` matching the selector
    pub fn query_selector(&self, root: NodeId, selector: &str) -> Option<NodeId> {
        let sel = SimpleSelector::parse(selector)?;
        self.descendants(root)
            .into_iter()
            .find(|&id| self.element(id).is_some_and(|e| sel.matches(e)))
    }

    /// All descendants of `root` matching the selector, in document order
    pub fn query_selector_all(&self, root: NodeId, selector: &str) -> Vec<NodeId> {
        let Some(sel) = SimpleSelector::parse(selector) else {
            return Vec::new();
        };
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.element(id).is_some_and(|e| sel.matches(e)))
            .collect()
    }

    /// Descendants carrying the given class
    pub fn get_elements_by_class_name(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.has_class(id, class))
            .collect()
    }
}

//! DOM Node
//!
//! Compact node representation: parent/child/sibling links by `NodeId`
//! instead of pointers, with node-specific data behind an enum.

use crate::{NodeId, Rect};

/// DOM node with arena links
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    /// Create a new element node
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::with_data(NodeData::Text(TextData { content: content.to_string() }))
    }

    /// Create a node around existing data (used by subtree cloning)
    pub fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Element
    Element(ElementData),
    /// Text content
    Text(TextData),
}

/// Element-specific data
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Tag name (lowercase)
    pub tag: String,
    /// Cached id attribute (very common lookup)
    pub id: Option<String>,
    /// Class list
    pub classes: Vec<String>,
    /// Attributes, data-* included
    pub attrs: Vec<Attribute>,
    /// Inline styles as property/value pairs
    pub styles: Vec<Attribute>,
    /// Layout bounds assigned by the host (headless stand-in for layout)
    pub bounds: Option<Rect>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            id: None,
            classes: Vec::new(),
            attrs: Vec::new(),
            styles: Vec::new(),
            bounds: None,
        }
    }

    /// Check class membership
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, replacing an existing value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        for attr in self.attrs.iter_mut() {
            if attr.name == name {
                attr.value = value.to_string();
                return;
            }
        }
        self.attrs.push(Attribute {
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    /// Get an inline style value
    pub fn get_style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|s| s.name == property)
            .map(|s| s.value.as_str())
    }

    /// Set an inline style, replacing an existing value
    pub fn set_style(&mut self, property: &str, value: &str) {
        for style in self.styles.iter_mut() {
            if style.name == property {
                style.value = value.to_string();
                return;
            }
        }
        self.styles.push(Attribute {
            name: property.to_string(),
            value: value.to_string(),
        });
    }
}

/// Text node data
#[derive(Debug, Clone)]
pub struct TextData {
    pub content: String,
}

/// Attribute or style entry
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

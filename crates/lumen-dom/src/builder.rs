//! Element Builder
//!
//! Fluent element construction: tag, classes, attributes and children
//! applied in one call, producing a detached subtree.

use crate::{DomTree, NodeId};

/// Fluent builder for element subtrees
#[derive(Debug, Default)]
pub struct ElementBuilder {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Child>,
}

#[derive(Debug)]
enum Child {
    Element(ElementBuilder),
    Text(String),
}

impl ElementBuilder {
    /// Start building an element with the given tag
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    /// Set the id attribute
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Add a single class
    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Add several classes
    pub fn classes<'a>(mut self, classes: impl IntoIterator<Item = &'a str>) -> Self {
        self.classes.extend(classes.into_iter().map(String::from));
        self
    }

    /// Set an attribute
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    /// Set a data-* attribute by bare key
    pub fn data(self, key: &str, value: &str) -> Self {
        let name = format!("data-{key}");
        self.attr(&name, value)
    }

    /// Append a text child
    pub fn text(mut self, content: &str) -> Self {
        self.children.push(Child::Text(content.to_string()));
        self
    }

    /// Append an element child
    pub fn child(mut self, child: ElementBuilder) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    /// Materialize the subtree into the arena, returning the detached root
    pub fn build(self, tree: &mut DomTree) -> NodeId {
        let root = tree.create_element(&self.tag);
        if let Some(id) = &self.id {
            tree.set_attr(root, "id", id);
        }
        for class in &self.classes {
            tree.add_class(root, class);
        }
        for (name, value) in &self.attrs {
            tree.set_attr(root, name, value);
        }
        for child in self.children {
            let node = match child {
                Child::Element(builder) => builder.build(tree),
                Child::Text(content) => tree.create_text(&content),
            };
            // Freshly built nodes always attach cleanly
            let _ = tree.append_child(root, node);
        }
        root
    }
}

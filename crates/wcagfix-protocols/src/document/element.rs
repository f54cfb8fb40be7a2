//! Element accessors used by rules.

use kuchikiki::traits::*;
use kuchikiki::{ElementData, NodeDataRef};

/// Handle to an element node inside a [`Document`](super::Document).
pub type ElementRef = NodeDataRef<ElementData>;

/// Attribute and navigation helpers over [`ElementRef`].
pub trait ElementExt {
    /// Lowercase local tag name.
    fn tag_name(&self) -> &str;

    /// Attribute value, if present (an empty value still counts as present).
    fn attr(&self, name: &str) -> Option<String>;

    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute, replacing any existing value.
    fn set_attr(&self, name: &str, value: &str);

    /// Remove an attribute. Returns whether it was present.
    fn remove_attr(&self, name: &str) -> bool;

    /// Concatenated text of all descendant text nodes.
    fn text(&self) -> String;

    /// The next sibling that is an element, skipping text and comments.
    fn next_element_sibling(&self) -> Option<ElementRef>;

    /// Whether both handles point at the same node.
    fn same_node(&self, other: &ElementRef) -> bool;

    /// Short `tag#id` description for logs and reports.
    fn describe(&self) -> String;
}

impl ElementExt for ElementRef {
    fn tag_name(&self) -> &str {
        &self.name.local
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).map(str::to_string)
    }

    fn has_attr(&self, name: &str) -> bool {
        self.attributes.borrow().contains(name)
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.attributes.borrow_mut().insert(name, value.to_string());
    }

    fn remove_attr(&self, name: &str) -> bool {
        self.attributes.borrow_mut().remove(name).is_some()
    }

    fn text(&self) -> String {
        self.as_node().text_contents()
    }

    fn next_element_sibling(&self) -> Option<ElementRef> {
        self.as_node().following_siblings().elements().next()
    }

    fn same_node(&self, other: &ElementRef) -> bool {
        self.as_node() == other.as_node()
    }

    fn describe(&self) -> String {
        match self.attr("id") {
            Some(id) if !id.is_empty() => format!("{}#{}", self.tag_name(), id),
            _ => self.tag_name().to_string(),
        }
    }
}

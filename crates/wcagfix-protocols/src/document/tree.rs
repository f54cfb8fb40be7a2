//! Parsed, mutable HTML document.

use kuchikiki::traits::*;
use kuchikiki::NodeRef;

use super::element::{ElementExt, ElementRef};
use crate::error::RuleError;

/// A parsed HTML document.
///
/// Owns the root of a single DOM tree. Elements handed out by [`Document::select`]
/// share nodes with the tree, so attribute changes made through them are
/// visible to every later reader.
pub struct Document {
    root: NodeRef,
}

impl Document {
    /// Parse an HTML string. HTML parsing never fails; malformed markup is
    /// repaired the way browsers do.
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchikiki::parse_html().one(html),
        }
    }

    /// All elements matching `selector`, in document order.
    pub fn select(&self, selector: &str) -> Result<Vec<ElementRef>, RuleError> {
        let matches = self
            .root
            .select(selector)
            .map_err(|()| RuleError::InvalidSelector(selector.to_string()))?;
        Ok(matches.collect())
    }

    /// First element matching `selector`, if any.
    pub fn select_first(&self, selector: &str) -> Result<Option<ElementRef>, RuleError> {
        let mut matches = self
            .root
            .select(selector)
            .map_err(|()| RuleError::InvalidSelector(selector.to_string()))?;
        Ok(matches.next())
    }

    /// The root `<html>` element.
    pub fn document_element(&self) -> Option<ElementRef> {
        self.root.children().elements().next()
    }

    /// The `<head>` element.
    pub fn head(&self) -> Option<ElementRef> {
        self.document_element()?
            .as_node()
            .children()
            .elements()
            .find(|el| el.tag_name() == "head")
    }

    /// Append a `<style>` element with the given text and attributes to `<head>`.
    pub fn append_style(&self, css: &str, attributes: &[(&str, &str)]) -> Result<ElementRef, RuleError> {
        let head = self
            .head()
            .ok_or_else(|| RuleError::MissingElement("head".to_string()))?;

        // Let the parser build the node so the text is stored as raw style content.
        let scratch = kuchikiki::parse_html().one(format!("<style>{}</style>", css));
        let style = scratch
            .select("style")
            .map_err(|()| RuleError::InvalidSelector("style".to_string()))?
            .next()
            .ok_or_else(|| RuleError::MissingElement("style".to_string()))?;
        for (name, value) in attributes {
            style.set_attr(name, *value);
        }

        let node = style.as_node().clone();
        node.detach();
        head.as_node().append(node);
        Ok(style)
    }

    /// Serialize the whole document, doctype included.
    pub fn serialize(&self) -> std::io::Result<String> {
        let mut out = Vec::new();
        self.root.serialize(&mut out)?;
        String::from_utf8(out)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("root", &self.document_element().map(|el| el.describe()))
            .finish()
    }
}

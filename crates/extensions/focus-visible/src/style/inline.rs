//! Editable view of an element's `style` attribute.

use std::fmt;

use wcagfix_protocols::document::{ElementExt, ElementRef};

use super::outline::outline_longhands;
use super::sheet::{parse_declarations, Declaration};

/// Ordered inline declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    declarations: Vec<Declaration>,
}

impl InlineStyle {
    pub fn parse(style: &str) -> Self {
        Self {
            declarations: parse_declarations(style),
        }
    }

    /// Current inline style of `element`; empty when it has none.
    pub fn of(element: &ElementRef) -> Self {
        element
            .attr("style")
            .map(|style| Self::parse(&style))
            .unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.name == name)
            .map(|d| d.value.as_str())
    }

    /// Set a property, replacing earlier declarations of it in place.
    ///
    /// Setting `outline` also drops the outline longhands it covers.
    pub fn set(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        if name == "outline" {
            self.declarations
                .retain(|d| !outline_longhands().contains(&d.name.as_str()));
        }

        let mut replaced = false;
        self.declarations.retain_mut(|d| {
            if d.name != name {
                return true;
            }
            if replaced {
                return false;
            }
            d.value = value.to_string();
            d.important = false;
            replaced = true;
            true
        });
        if !replaced {
            self.declarations.push(Declaration::new(name, value, false));
        }
    }

    /// Remove a property. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.declarations.len();
        self.declarations.retain(|d| d.name != name);
        self.declarations.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Write back to `element`, dropping the attribute when empty.
    pub fn apply_to(&self, element: &ElementRef) {
        if self.is_empty() {
            element.remove_attr("style");
        } else {
            element.set_attr("style", &self.to_string());
        }
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decl) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {}", decl.name, decl.value)?;
            if decl.important {
                f.write_str(" !important")?;
            }
            f.write_str(";")?;
        }
        Ok(())
    }
}

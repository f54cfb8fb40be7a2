//! Author-origin cascade over `<style>` elements and inline styles.

use kuchikiki::{Selectors, Specificity};
use tracing::debug;
use wcagfix_protocols::document::{Document, ElementExt, ElementRef};
use wcagfix_protocols::error::RuleError;
use wcagfix_protocols::style::{StyleOracle, StyleResolver};

use super::outline::expand_shorthands;
use super::sheet::{parse_declarations, parse_stylesheet, Declaration};

/// Resolves a [`Cascade`] from the document's embedded stylesheets.
#[derive(Debug, Default, Clone, Copy)]
pub struct CascadeResolver;

impl StyleResolver for CascadeResolver {
    fn resolve(&self, document: &Document) -> Result<Box<dyn StyleOracle>, RuleError> {
        Ok(Box::new(Cascade::from_document(document)?))
    }
}

struct CompiledRule {
    selectors: Selectors,
    declarations: Vec<Declaration>,
}

/// Cascade ordering key. Field order is comparison order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Priority {
    important: bool,
    inline: bool,
    specificity: Option<Specificity>,
    position: (usize, usize),
}

/// Snapshot of every style rule in a document.
///
/// Built once per detection pass; later edits to `<style>` elements are not
/// seen, while inline `style` attributes are read on every lookup.
pub struct Cascade {
    rules: Vec<CompiledRule>,
}

impl Cascade {
    /// Collect rules from every `<style>` element in document order.
    pub fn from_document(document: &Document) -> Result<Self, RuleError> {
        let sheets: Vec<String> = document
            .select("style")?
            .iter()
            .map(|style| style.text())
            .collect();
        Ok(Self::from_stylesheets(sheets.iter().map(String::as_str)))
    }

    /// Build from raw stylesheet sources, earliest first.
    pub fn from_stylesheets<'a>(sheets: impl IntoIterator<Item = &'a str>) -> Self {
        let mut rules = Vec::new();
        for sheet in sheets {
            for rule in parse_stylesheet(sheet) {
                match Selectors::compile(&rule.selectors) {
                    Ok(selectors) => rules.push(CompiledRule {
                        selectors,
                        declarations: expand_shorthands(rule.declarations),
                    }),
                    Err(()) => {
                        debug!(selectors = %rule.selectors, "Skipping rule with unsupported selector")
                    }
                }
            }
        }
        Self { rules }
    }

    /// Number of rules whose selectors compiled.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Winning declared value for `name`, before keyword resolution.
    fn declared(&self, element: &ElementRef, name: &str) -> Option<String> {
        let mut winner: Option<(Priority, String)> = None;

        for (rule_index, rule) in self.rules.iter().enumerate() {
            let specificity = rule
                .selectors
                .0
                .iter()
                .filter(|selector| selector.matches(element))
                .map(|selector| selector.specificity())
                .max();
            let Some(specificity) = specificity else {
                continue;
            };
            for (decl_index, decl) in rule.declarations.iter().enumerate() {
                if decl.name == name {
                    let priority = Priority {
                        important: decl.important,
                        inline: false,
                        specificity: Some(specificity),
                        position: (rule_index, decl_index),
                    };
                    consider(priority, &decl.value, &mut winner);
                }
            }
        }

        if let Some(style) = element.attr("style") {
            let inline = expand_shorthands(parse_declarations(&style));
            for (decl_index, decl) in inline.iter().enumerate() {
                if decl.name == name {
                    let priority = Priority {
                        important: decl.important,
                        inline: true,
                        specificity: None,
                        position: (self.rules.len(), decl_index),
                    };
                    consider(priority, &decl.value, &mut winner);
                }
            }
        }

        winner.map(|(_, value)| value)
    }
}

fn consider(priority: Priority, value: &str, winner: &mut Option<(Priority, String)>) {
    if winner.as_ref().is_none_or(|(current, _)| priority >= *current) {
        *winner = Some((priority, value.to_string()));
    }
}

impl StyleOracle for Cascade {
    fn property(&self, element: &ElementRef, name: &str) -> Option<String> {
        let value = self.declared(element, name)?;
        match value.to_ascii_lowercase().as_str() {
            "inherit" => {
                let parent = element.as_node().parent()?.into_element_ref()?;
                self.property(&parent, name)
            }
            // Outline longhands are not inherited, so these all mean initial.
            "initial" | "unset" | "revert" | "revert-layer" => None,
            _ => Some(value),
        }
    }
}

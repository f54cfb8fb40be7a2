//! `outline` shorthand expansion.

use super::sheet::Declaration;

const OUTLINE_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
    "auto",
];

const WIDE_KEYWORDS: &[&str] = &["inherit", "initial", "unset", "revert", "revert-layer"];

const OUTLINE_LONGHANDS: [&str; 3] = ["outline-style", "outline-width", "outline-color"];

/// Replace every `outline` shorthand with its three longhands.
///
/// Components the shorthand omits take their initial values, so
/// `outline: 2px red` resets `outline-style` to `none`.
pub fn expand_shorthands(declarations: Vec<Declaration>) -> Vec<Declaration> {
    let mut expanded = Vec::with_capacity(declarations.len());
    for decl in declarations {
        if decl.name == "outline" {
            expanded.extend(expand_outline(&decl.value, decl.important));
        } else {
            expanded.push(decl);
        }
    }
    expanded
}

/// Names of the longhands an `outline` shorthand sets.
pub(crate) fn outline_longhands() -> &'static [&'static str] {
    &OUTLINE_LONGHANDS
}

fn expand_outline(value: &str, important: bool) -> Vec<Declaration> {
    let value = value.trim();
    if WIDE_KEYWORDS.iter().any(|k| value.eq_ignore_ascii_case(k)) {
        return OUTLINE_LONGHANDS
            .iter()
            .map(|name| Declaration::new(*name, value.to_ascii_lowercase(), important))
            .collect();
    }

    let mut style = None;
    let mut width = None;
    let mut color = Vec::new();
    for token in split_components(value) {
        let lower = token.to_ascii_lowercase();
        if style.is_none() && OUTLINE_STYLES.contains(&lower.as_str()) {
            style = Some(lower);
        } else if width.is_none() && is_width(&lower) {
            width = Some(token.to_string());
        } else {
            color.push(token);
        }
    }

    vec![
        Declaration::new("outline-style", style.unwrap_or_else(|| "none".to_string()), important),
        Declaration::new("outline-width", width.unwrap_or_else(|| "medium".to_string()), important),
        Declaration::new(
            "outline-color",
            if color.is_empty() {
                "currentcolor".to_string()
            } else {
                color.join(" ")
            },
            important,
        ),
    ]
}

/// Split on top-level whitespace, keeping `rgb(0, 0, 255)` in one piece.
fn split_components(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    for (i, ch) in value.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    parts.push(&value[s..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        parts.push(&value[s..]);
    }
    parts
}

fn is_width(token: &str) -> bool {
    matches!(token, "thin" | "medium" | "thick")
        || token.starts_with("calc(")
        || token
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || c == '.')
}

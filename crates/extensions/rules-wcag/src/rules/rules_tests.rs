use super::*;
use wcagfix_protocols::document::{Document, ElementExt};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta name="viewport" content="width=device-width, user-scalable=no">
</head>
<body orientation="landscape">
  <div id="main">
    <label>Email *</label>
    <input id="email" type="email">
    <label title="Preset">Phone</label>
    <input id="phone" autocomplete="tel">
    <span role="timer">30</span>
    <a href="https://example.com" target="_blank">Docs</a>
    <p id="">orphan</p>
  </div>
  <div>plain</div>
</body>
</html>"#;

fn apply_all(doc: &Document) -> usize {
    default_rules()
        .iter()
        .map(|rule| rule.apply(doc).unwrap().changed)
        .sum()
}

/// Attribute state of every element, in document order, with the generated
/// style elements excluded.
fn attribute_snapshot(doc: &Document) -> Vec<(String, Vec<(String, String)>)> {
    doc.select("*")
        .unwrap()
        .iter()
        .filter(|el| el.tag_name() != "style")
        .map(|el| {
            let mut attrs: Vec<(String, String)> = el
                .attributes
                .borrow()
                .map
                .iter()
                .map(|(name, attr)| (name.local.to_string(), attr.value.clone()))
                .collect();
            attrs.sort();
            (el.tag_name().to_string(), attrs)
        })
        .collect()
}

#[test]
fn test_default_rules_order() {
    let ids: Vec<String> = default_rules().iter().map(|r| r.id().to_string()).collect();
    assert_eq!(
        ids,
        vec![
            "remove-orientation",
            "autocomplete",
            "landmark-role",
            "viewport-resize",
            "reflow-css",
            "label-title",
            "focus-css",
            "document-lang",
            "lang-parts",
            "timer-live",
            "new-tab-warning",
            "aria-required",
            "parsing-id",
        ]
    );
}

#[test]
fn test_default_rules_unique_ids() {
    let mut ids: Vec<String> = default_rules().iter().map(|r| r.id().to_string()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 13);
}

#[test]
fn test_every_rule_names_a_criterion() {
    for rule in default_rules() {
        let def = rule.definition();
        assert!(!def.criteria.is_empty(), "{} has no criterion", def.id);
        assert_eq!(def.extension_id.as_deref(), Some("rules-wcag"));
    }
}

#[test]
fn test_full_rule_set_effects() {
    let doc = Document::parse(PAGE);
    apply_all(&doc);

    let root = doc.document_element().unwrap();
    assert_eq!(root.attr("lang").as_deref(), Some(DEFAULT_LANG));

    let body = doc.select_first("body").unwrap().unwrap();
    assert!(!body.has_attr("orientation"));

    let meta = doc.select_first("meta[name=viewport]").unwrap().unwrap();
    assert_eq!(meta.attr("content").as_deref(), Some(VIEWPORT_CONTENT));

    let main = doc.select_first("#main").unwrap().unwrap();
    assert_eq!(main.attr("role").as_deref(), Some("region"));

    let email = doc.select_first("#email").unwrap().unwrap();
    assert_eq!(email.attr("autocomplete").as_deref(), Some("on"));
    assert_eq!(email.attr("aria-required").as_deref(), Some("true"));

    let phone = doc.select_first("#phone").unwrap().unwrap();
    assert_eq!(phone.attr("autocomplete").as_deref(), Some("tel"));
    assert!(!phone.has_attr("aria-required"));

    let labels = doc.select("label").unwrap();
    assert_eq!(labels[0].attr("title").as_deref(), Some("Email *"));
    assert_eq!(labels[1].attr("title").as_deref(), Some("Preset"));

    let timer = doc.select_first("[role=timer]").unwrap().unwrap();
    assert_eq!(timer.attr("aria-live").as_deref(), Some("off"));

    let link = doc.select_first("a").unwrap().unwrap();
    assert_eq!(link.attr("title").as_deref(), Some(NEW_TAB_TITLE));

    let orphan = doc.select_first("p").unwrap().unwrap();
    assert!(orphan.attr("id").unwrap().starts_with("generated-id-"));

    assert_eq!(doc.select(&format!("head style[{}]", STYLESHEET_MARKER)).unwrap().len(), 2);
}

#[test]
fn test_rule_set_is_idempotent() {
    let doc = Document::parse(PAGE);
    assert!(apply_all(&doc) > 0);
    let once = attribute_snapshot(&doc);
    let html_once = doc.serialize().unwrap();

    assert_eq!(apply_all(&doc), 0);
    assert_eq!(attribute_snapshot(&doc), once);
    assert_eq!(doc.serialize().unwrap(), html_once);
}

#[test]
fn test_rule_set_idempotent_across_reparse() {
    let doc = Document::parse(PAGE);
    apply_all(&doc);
    let html_once = doc.serialize().unwrap();

    let reparsed = Document::parse(&html_once);
    assert_eq!(apply_all(&reparsed), 0);
    assert_eq!(reparsed.serialize().unwrap(), html_once);
}

#[test]
fn test_div_without_id_never_gets_role() {
    let doc = Document::parse(PAGE);
    apply_all(&doc);
    for div in doc.select("div").unwrap() {
        if div.attr("id").is_none_or(|id| id.is_empty()) {
            assert!(!div.has_attr("role"));
        }
    }
}

#[test]
fn test_minimal_document() {
    let doc = Document::parse("<html><body><label>Name</label><input></body></html>");
    apply_all(&doc);
    assert_eq!(doc.document_element().unwrap().attr("lang").as_deref(), Some("en"));
    let input = doc.select_first("input").unwrap().unwrap();
    assert_eq!(input.attr("autocomplete").as_deref(), Some("on"));
    let label = doc.select_first("label").unwrap().unwrap();
    assert_eq!(label.attr("title").as_deref(), Some("Name"));
    assert_eq!(doc.select("head style").unwrap().len(), 2);
}

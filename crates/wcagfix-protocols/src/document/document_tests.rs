use super::*;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Test</title></head>
<body>
  <label for="name">Name *</label>
  <!-- comment -->
  <input id="name">
  <div id="main"><a href="/x" target="_blank">Link</a></div>
</body>
</html>"#;

#[test]
fn test_parse_creates_head_and_body() {
    let doc = Document::parse("<p>hello</p>");
    assert!(doc.head().is_some());
    assert_eq!(doc.document_element().unwrap().tag_name(), "html");
    assert_eq!(doc.select("body p").unwrap().len(), 1);
}

#[test]
fn test_select_document_order() {
    let doc = Document::parse(PAGE);
    let tags: Vec<String> = doc
        .select("label, input, a")
        .unwrap()
        .iter()
        .map(|el| el.tag_name().to_string())
        .collect();
    assert_eq!(tags, vec!["label", "input", "a"]);
}

#[test]
fn test_select_invalid_selector() {
    let doc = Document::parse(PAGE);
    let err = doc.select("a[").unwrap_err();
    assert!(matches!(err, crate::error::RuleError::InvalidSelector(_)));
}

#[test]
fn test_select_first_none() {
    let doc = Document::parse(PAGE);
    assert!(doc.select_first("meta[name=\"viewport\"]").unwrap().is_none());
}

#[test]
fn test_attribute_roundtrip() {
    let doc = Document::parse(PAGE);
    let input = doc.select_first("input").unwrap().unwrap();
    assert!(!input.has_attr("autocomplete"));
    input.set_attr("autocomplete", "on");
    assert_eq!(input.attr("autocomplete").as_deref(), Some("on"));
    assert!(input.remove_attr("autocomplete"));
    assert!(!input.remove_attr("autocomplete"));
}

#[test]
fn test_empty_attribute_is_present() {
    let doc = Document::parse(r#"<div id="">x</div>"#);
    let div = doc.select_first("div").unwrap().unwrap();
    assert!(div.has_attr("id"));
    assert_eq!(div.attr("id").as_deref(), Some(""));
}

#[test]
fn test_next_element_sibling_skips_text_and_comments() {
    let doc = Document::parse(PAGE);
    let label = doc.select_first("label").unwrap().unwrap();
    let next = label.next_element_sibling().unwrap();
    assert_eq!(next.tag_name(), "input");
}

#[test]
fn test_same_node() {
    let doc = Document::parse(PAGE);
    let a = doc.select_first("a").unwrap().unwrap();
    let again = doc.select_first("div a").unwrap().unwrap();
    let input = doc.select_first("input").unwrap().unwrap();
    assert!(a.same_node(&again));
    assert!(!a.same_node(&input));
}

#[test]
fn test_describe() {
    let doc = Document::parse(PAGE);
    assert_eq!(doc.select_first("input").unwrap().unwrap().describe(), "input#name");
    assert_eq!(doc.select_first("a").unwrap().unwrap().describe(), "a");
}

#[test]
fn test_text_contents() {
    let doc = Document::parse(PAGE);
    let label = doc.select_first("label").unwrap().unwrap();
    assert_eq!(label.text(), "Name *");
}

#[test]
fn test_append_style() {
    let doc = Document::parse(PAGE);
    doc.append_style(".row { display: flex; }", &[("data-marker", "x")])
        .unwrap();
    let style = doc.select_first("head style[data-marker=\"x\"]").unwrap().unwrap();
    assert_eq!(style.text(), ".row { display: flex; }");
    let html = doc.serialize().unwrap();
    assert!(html.contains("<style data-marker=\"x\">.row { display: flex; }</style>"));
}

#[test]
fn test_serialize_keeps_doctype() {
    let doc = Document::parse(PAGE);
    let html = doc.serialize().unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Test</title>"));
}

#[test]
fn test_changes_visible_in_serialization() {
    let doc = Document::parse("<html><body><input></body></html>");
    doc.select_first("input").unwrap().unwrap().set_attr("autocomplete", "on");
    assert!(doc.serialize().unwrap().contains(r#"<input autocomplete="on">"#));
}

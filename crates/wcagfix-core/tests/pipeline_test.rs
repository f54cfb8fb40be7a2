//! End-to-end runs with the shipped rules and the focus-visible check.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;

use wcagfix_core::{ExtensionRegistry, Orchestrator, Pipeline, PipelineError, RuleRegistry};
use wcagfix_focus_visible::{CascadeResolver, FocusVisibleExtension, FOCUS_FIX_TITLE};
use wcagfix_protocols::document::{Document, ElementExt};
use wcagfix_protocols::error::{AcquireError, RuleError};
use wcagfix_protocols::rule::{Rule, RuleDefinition, RuleOutcome};
use wcagfix_protocols::source::{AcquiredDocument, DocumentSource};
use wcagfix_rules_wcag::{WcagRulesExtension, NEW_TAB_TITLE, VIEWPORT_CONTENT};
use wcagfix_source_filesystem::FileSource;

struct StaticSource(&'static str);

#[async_trait]
impl DocumentSource for StaticSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    async fn acquire(&self) -> Result<AcquiredDocument, AcquireError> {
        Ok(AcquiredDocument::new("static", self.0))
    }
}

struct MarkParagraphs(RuleDefinition);

impl Rule for MarkParagraphs {
    fn definition(&self) -> &RuleDefinition {
        &self.0
    }

    fn apply(&self, document: &Document) -> Result<RuleOutcome, RuleError> {
        let paragraphs = document.select("p")?;
        for p in &paragraphs {
            p.set_attr("data-marked", "1");
        }
        Ok(RuleOutcome::changed(paragraphs.len()))
    }
}

struct RequireMain(RuleDefinition);

impl Rule for RequireMain {
    fn definition(&self) -> &RuleDefinition {
        &self.0
    }

    fn apply(&self, document: &Document) -> Result<RuleOutcome, RuleError> {
        document
            .select_first("main")?
            .ok_or_else(|| RuleError::MissingElement("main".to_string()))?;
        Ok(RuleOutcome::changed(0))
    }
}

fn pipeline() -> Pipeline {
    let mut rules = RuleRegistry::new();
    let mut extensions = ExtensionRegistry::new();
    extensions
        .install(Arc::new(WcagRulesExtension::new()), &mut rules)
        .unwrap();
    extensions
        .install(Arc::new(FocusVisibleExtension::new()), &mut rules)
        .unwrap();
    Pipeline::new(Arc::new(rules), Arc::new(CascadeResolver))
}

async fn run_static(html: &'static str, dir: &TempDir) -> (Document, wcagfix_core::RunReport) {
    let output = dir.path().join("fixed_output.html");
    let report = Orchestrator::new(Box::new(StaticSource(html)), pipeline(), &output)
        .run()
        .await
        .unwrap();
    let written = std::fs::read_to_string(&output).unwrap();
    (Document::parse(&written), report)
}

fn first(doc: &Document, selector: &str) -> wcagfix_protocols::document::ElementRef {
    doc.select_first(selector).unwrap().unwrap()
}

fn style_fragments(html: &str) -> usize {
    html.matches("<style data-wcagfix=").count()
}

#[tokio::test]
async fn test_minimal_document() {
    let dir = TempDir::new().unwrap();
    let (doc, report) =
        run_static("<html><body><label>Name</label><input></body></html>", &dir).await;

    assert_eq!(first(&doc, "html").attr("lang").as_deref(), Some("en"));
    assert_eq!(first(&doc, "label").attr("title").as_deref(), Some("Name"));

    let input = first(&doc, "input");
    assert_eq!(input.attr("autocomplete").as_deref(), Some("on"));
    assert_eq!(
        input.attr("style").as_deref(),
        Some("outline: 2px solid #00f; outline-offset: 2px;")
    );
    assert_eq!(input.attr("title").as_deref(), Some(FOCUS_FIX_TITLE));

    let fragments = doc.select("head > style[data-wcagfix]").unwrap();
    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0].attr("data-wcagfix").as_deref(), Some("reflow-css"));
    assert_eq!(fragments[1].attr("data-wcagfix").as_deref(), Some("focus-css"));

    assert_eq!(report.rules.len(), 13);
    assert_eq!(report.rules[0].id, "remove-orientation");
    assert_eq!(report.rules[12].id, "parsing-id");
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].element, "input");
    assert_eq!(report.fixes[0].changed, 1);
    assert!(report.bytes_written > 0);
}

#[tokio::test]
async fn test_viewport_and_existing_autocomplete() {
    let dir = TempDir::new().unwrap();
    let (doc, _) = run_static(
        r#"<html><head><meta name="viewport" content="width=device-width, user-scalable=no"></head>
<body><input autocomplete="off"></body></html>"#,
        &dir,
    )
    .await;

    assert_eq!(
        first(&doc, r#"meta[name="viewport"]"#).attr("content").as_deref(),
        Some(VIEWPORT_CONTENT)
    );
    assert_eq!(first(&doc, "input").attr("autocomplete").as_deref(), Some("off"));
}

#[tokio::test]
async fn test_remediator_writes_title_last() {
    let dir = TempDir::new().unwrap();
    let (doc, _) = run_static(
        r#"<html><body>
<a id="plain" href="/a" target="_blank">plain</a>
<a id="styled" href="/b" target="_blank" style="outline: 1px dotted red">styled</a>
</body></html>"#,
        &dir,
    )
    .await;

    assert_eq!(first(&doc, "#plain").attr("title").as_deref(), Some(FOCUS_FIX_TITLE));
    assert_eq!(first(&doc, "#styled").attr("title").as_deref(), Some(NEW_TAB_TITLE));
    assert_eq!(
        first(&doc, "#styled").attr("style").as_deref(),
        Some("outline: 1px dotted red")
    );
}

#[tokio::test]
async fn test_stylesheet_outline_none_is_remediated() {
    let dir = TempDir::new().unwrap();
    let (doc, report) = run_static(
        r#"<html><head><style>button { outline: none } .ok { outline-style: solid }</style></head>
<body><button>Go</button><button class="ok">Fine</button></body></html>"#,
        &dir,
    )
    .await;

    let buttons = doc.select("button").unwrap();
    assert_eq!(buttons[0].attr("title").as_deref(), Some(FOCUS_FIX_TITLE));
    assert!(buttons[1].attr("title").is_none());
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].reason, "outline-style is none");
}

#[tokio::test]
async fn test_rerun_on_output_adds_no_stylesheets() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("page.html");
    let first_out = dir.path().join("first.html");
    let second_out = dir.path().join("second.html");
    std::fs::write(
        &input,
        "<html><head><title>t</title></head><body><button>Go</button><div id=\"main\"></div></body></html>",
    )
    .unwrap();

    Orchestrator::new(Box::new(FileSource::new(&input)), pipeline(), &first_out)
        .run()
        .await
        .unwrap();
    let report = Orchestrator::new(Box::new(FileSource::new(&first_out)), pipeline(), &second_out)
        .run()
        .await
        .unwrap();

    let first_html = std::fs::read_to_string(&first_out).unwrap();
    let second_html = std::fs::read_to_string(&second_out).unwrap();
    assert_eq!(style_fragments(&first_html), 2);
    assert_eq!(style_fragments(&second_html), 2);
    assert_eq!(first_html, second_html);
    assert!(report.issues.is_empty());
    assert_eq!(report.total_changes(), 0);
}

#[tokio::test]
async fn test_unacquirable_source_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("fixed_output.html");
    let source = FileSource::new(dir.path().join("missing.html"));

    let err = Orchestrator::new(Box::new(source), pipeline(), &output)
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, PipelineError::Acquisition(AcquireError::NotFound(_))));
    assert!(!Path::new(&output).exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_report_records_source_and_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.html");
    let report = Orchestrator::new(Box::new(StaticSource("<p>x</p>")), pipeline(), &output)
        .run()
        .await
        .unwrap();

    assert_eq!(report.source, "static");
    assert_eq!(report.location, "static");
    assert_eq!(report.output, output);
    let json = report.to_json().unwrap();
    assert!(json.contains("\"rules\""));
}

#[tokio::test]
async fn test_rule_failure_after_edits_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("fixed_output.html");
    let mut rules = RuleRegistry::new();
    rules
        .register(Arc::new(MarkParagraphs(RuleDefinition::new(
            "mark-paragraphs",
            "Mark",
            "Marks every paragraph",
        ))))
        .unwrap();
    rules
        .register(Arc::new(RequireMain(RuleDefinition::new(
            "require-main",
            "Require main",
            "Fails without a <main> element",
        ))))
        .unwrap();
    let pipeline = Pipeline::new(Arc::new(rules), Arc::new(CascadeResolver));

    let err = Orchestrator::new(Box::new(StaticSource("<p>a</p><p>b</p>")), pipeline, &output)
        .run()
        .await
        .unwrap_err();

    match err {
        PipelineError::Rule { rule, source } => {
            assert_eq!(rule, "require-main");
            assert!(matches!(source, RuleError::MissingElement(_)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!output.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

//! Extension registration and source construction for wcagfix.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use wcagfix_config::{Config, SourceSelection};
use wcagfix_core::{ExtensionRegistry, PipelineError, RuleRegistry};
use wcagfix_focus_visible::FocusVisibleExtension;
use wcagfix_protocols::source::DocumentSource;
use wcagfix_rules_wcag::WcagRulesExtension;
use wcagfix_source_filesystem::FileSource;
use wcagfix_source_web::HttpSource;

/// Install the built-in extensions. Markup rules always come before checks.
pub(crate) fn register_extensions() -> Result<(RuleRegistry, ExtensionRegistry), PipelineError> {
    let mut rules = RuleRegistry::new();
    let mut extensions = ExtensionRegistry::new();

    extensions.install(Arc::new(WcagRulesExtension::new()), &mut rules)?;
    extensions.install(Arc::new(FocusVisibleExtension::new()), &mut rules)?;

    info!(
        extensions = extensions.list().len(),
        rules = rules.list().len(),
        checks = rules.list_checks().len(),
        "Registered extensions"
    );
    Ok((rules, extensions))
}

/// Build the document source the configuration selects.
pub(crate) fn build_source(config: &Config) -> Result<Box<dyn DocumentSource>, PipelineError> {
    match config.source.selection() {
        SourceSelection::Url(url) => Ok(Box::new(HttpSource::with_options(
            &url,
            Duration::from_secs(config.fetch.timeout_seconds),
            &config.fetch.user_agent,
        )?)),
        SourceSelection::Path(path) => Ok(Box::new(FileSource::new(path))),
    }
}

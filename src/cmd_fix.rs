//! `fix` subcommand.

use std::sync::Arc;

use tracing::info;

use wcagfix_config::Config;
use wcagfix_core::{Orchestrator, Pipeline};
use wcagfix_focus_visible::CascadeResolver;

use crate::cli::FixArgs;
use crate::register::{build_source, register_extensions};

/// Apply command-line overrides on top of the loaded configuration.
pub(crate) fn apply_overrides(config: &mut Config, args: &FixArgs) {
    if let Some(url) = &args.url {
        config.source.url = Some(url.clone());
        config.source.path = None;
    }
    if let Some(file) = &args.file {
        config.source.path = Some(file.clone());
        config.source.url = None;
    }
    if let Some(output) = &args.output {
        config.output.path = output.clone();
    }
}

/// Run the pipeline once and report the result.
pub(crate) async fn run_fix(config: &Config, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (rules, _extensions) = register_extensions()?;
    let pipeline = Pipeline::new(Arc::new(rules), Arc::new(CascadeResolver));
    let source = build_source(config)?;

    let report = Orchestrator::new(source, pipeline, &config.output.path)
        .run()
        .await?;
    info!(
        changes = report.total_changes(),
        duration_ms = report.duration_ms,
        "Document fixed"
    );

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!(
            "The fixed HTML has been saved to \"{}\"",
            report.output.display()
        );
    }
    Ok(())
}

//! Acquire, transform, serialize and persist one document.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info, warn};
use wcagfix_protocols::document::Document;
use wcagfix_protocols::source::DocumentSource;

use crate::error::PipelineError;
use crate::pipeline::{Pipeline, PipelineOutcome};
use crate::report::RunReport;

/// Drives one run end to end.
///
/// The output file is only replaced once the whole document has been
/// transformed and written to a sibling temporary file.
pub struct Orchestrator {
    source: Box<dyn DocumentSource>,
    pipeline: Pipeline,
    output: PathBuf,
}

impl Orchestrator {
    pub fn new(source: Box<dyn DocumentSource>, pipeline: Pipeline, output: impl Into<PathBuf>) -> Self {
        Self {
            source,
            pipeline,
            output: output.into(),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub async fn run(&self) -> Result<RunReport, PipelineError> {
        let started_at = Utc::now();
        let timer = Instant::now();
        let source = self.source.describe();
        info!(source = %source, "Starting run");

        let acquired = self.source.acquire().await?;
        let (html, outcome) = self.transform(&acquired.html)?;
        let bytes_written = persist(&self.output, &html).await?;

        info!(
            output = %self.output.display(),
            issues = outcome.issues.len(),
            bytes = bytes_written,
            "Run finished"
        );

        Ok(RunReport {
            source,
            location: acquired.location,
            output: self.output.clone(),
            started_at,
            duration_ms: timer.elapsed().as_millis() as u64,
            rules: outcome.rules,
            issues: outcome.issues,
            fixes: outcome.fixes,
            bytes_written,
        })
    }

    /// Parse, run the pipeline and serialize. The tree never outlives this call.
    fn transform(&self, html: &str) -> Result<(String, PipelineOutcome), PipelineError> {
        let document = Document::parse(html);
        let outcome = self.pipeline.run(&document)?;
        let html = document.serialize().map_err(PipelineError::Serialize)?;
        Ok((html, outcome))
    }
}

/// Write through a sibling temporary file, then rename over `path`.
async fn persist(path: &Path, html: &str) -> Result<usize, PipelineError> {
    let persist_error = |source| PipelineError::Persist {
        path: path.display().to_string(),
        source,
    };
    let temp = temp_path(path);
    debug!(temp = %temp.display(), "Writing output");

    tokio::fs::write(&temp, html).await.map_err(persist_error)?;
    if let Err(e) = tokio::fs::rename(&temp, path).await {
        if let Err(cleanup) = tokio::fs::remove_file(&temp).await {
            warn!(temp = %temp.display(), error = %cleanup, "Failed to remove temporary output");
        }
        return Err(persist_error(e));
    }

    Ok(html.len())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}

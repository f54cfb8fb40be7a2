//! CLI definitions for wcagfix.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// wcagfix CLI.
#[derive(Parser)]
#[command(name = "wcagfix")]
#[command(about = "Apply WCAG accessibility fixes to an HTML document")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (optional)
    #[arg(short, long, default_value = "wcagfix.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Fix a document and write the result (default)
    Fix(FixArgs),

    /// List rules and checks in run order
    Rules {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Args, Default)]
pub(crate) struct FixArgs {
    /// Fetch the document from this URL
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read the document from this file
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Where to write the fixed document
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

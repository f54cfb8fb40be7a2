//! wcagfix - accessibility remediation for HTML documents
//!
//! Main entry point for the wcagfix CLI.

mod cli;
mod cmd_fix;
mod cmd_rules;
mod logging;
mod register;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};

use wcagfix_config::{Config, ConfigLoader, ConfigValidator};

use crate::cli::{Cli, Commands, FixArgs};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Run failed");
            eprintln!("Error processing the website: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ConfigLoader::load_or_default(&cli.config)?;

    let command = cli.command.unwrap_or_else(|| Commands::Fix(FixArgs::default()));
    if let Commands::Fix(args) = &command {
        cmd_fix::apply_overrides(&mut config, args);
    }

    logging::init_tracing(&config.logging)?;
    check_config(&config)?;

    match command {
        Commands::Fix(args) => cmd_fix::run_fix(&config, args.json).await,
        Commands::Rules { format } => cmd_rules::list_rules(format),
    }
}

/// Log validation warnings and fail on errors.
fn check_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let result = ConfigValidator::validate(config);
    for warning in &result.warnings {
        warn!(path = %warning.path, "{}", warning.message);
    }
    if !result.is_valid() {
        let errors: Vec<String> = result.errors.iter().map(ToString::to_string).collect();
        return Err(format!("invalid configuration: {}", errors.join("; ")).into());
    }
    Ok(())
}

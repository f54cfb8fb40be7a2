//! `rules` subcommand.

use serde_json::json;

use crate::cli::OutputFormat;
use crate::register::register_extensions;

/// Print mutation rules, then checks, in run order.
pub(crate) fn list_rules(format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let (rules, _extensions) = register_extensions()?;
    let mutations = rules.list();
    let checks = rules.list_checks();

    match format {
        OutputFormat::Json => {
            let value = json!({ "rules": mutations, "checks": checks });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            println!("{:<4} {:<20} {:<14} {}", "#", "ID", "WCAG", "NAME");
            println!("{}", "-".repeat(70));
            for (i, def) in mutations.iter().chain(&checks).enumerate() {
                println!(
                    "{:<4} {:<20} {:<14} {}",
                    i + 1,
                    def.id,
                    def.criteria_label(),
                    def.name
                );
            }
        }
    }

    Ok(())
}

//! Output formatting utilities for the CLI
//!
//! Provides table and JSON formatting with colors.

use ago_core::AliasData;
use anyhow::Result;
use colored::*;

use tabled::{settings::Style, Table, Tabled};

/// Output format options
#[derive(Debug, Clone)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Format the alias listing, one row per alias in ascending order.
pub fn format_aliases(aliases: &AliasData, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(aliases.to_json()?),
        OutputFormat::Table => {
            #[derive(Tabled)]
            struct AliasRow {
                #[tabled(rename = "Alias")]
                alias: String,
                #[tabled(rename = "Package")]
                package: String,
            }

            let rows: Vec<AliasRow> = aliases
                .iter()
                .map(|(alias, target)| AliasRow {
                    alias: alias.to_string(),
                    package: target.cyan().to_string(),
                })
                .collect();

            let table = Table::new(rows).with(Style::rounded()).to_string();
            Ok(table)
        }
    }
}

/// Format the `> tool args...` line printed before running the wrapped tool.
pub fn format_command(tool: &str, args: &[String]) -> String {
    let mut line = format!("> {}", tool);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line.dimmed().to_string()
}

/// Format success message
pub fn format_success(message: &str) -> String {
    format!("{} {}", "✓".green().bold(), message)
}

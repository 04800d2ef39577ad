//! Components command listing the palette.

use crate::cli::common::{CliError, CliResult};
use crate::generator::defaults_for;
use crate::models::ComponentKind;
use clap::Args;
use serde::Serialize;
use std::fmt::Write;

/// List available component types
#[derive(Debug, Clone, Args)]
pub struct ComponentsArgs {
    /// Output as JSON, including default properties
    #[arg(long)]
    pub json: bool,

    /// Case-insensitive filter on name, description or category
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComponentInfo {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    description: String,
    category: String,
    default_properties: crate::models::Properties,
}

impl ComponentsArgs {
    /// Execute the components command
    pub fn execute(&self) -> CliResult<()> {
        let kinds = ComponentKind::search(self.search.as_deref());

        if self.json {
            let infos: Vec<ComponentInfo> = kinds
                .iter()
                .map(|kind| ComponentInfo {
                    kind: kind.as_str().to_string(),
                    name: kind.display_name().to_string(),
                    description: kind.description().to_string(),
                    category: category_label(kind),
                    default_properties: defaults_for(kind),
                })
                .collect();
            let json = serde_json::to_string_pretty(&infos)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            print!("{}", format_table(&kinds));
        }

        Ok(())
    }
}

fn category_label(kind: &ComponentKind) -> String {
    kind.category().map(|c| c.to_string()).unwrap_or_default()
}

fn format_table(kinds: &[ComponentKind]) -> String {
    let mut output = String::new();
    for kind in kinds {
        let _ = writeln!(
            output,
            "{:<18} {:<20} {:<16} {}",
            kind.as_str(),
            kind.display_name(),
            category_label(kind),
            kind.description()
        );
    }
    let _ = writeln!(output, "\n{} component types", kinds.len());
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table() {
        let table = format_table(&[ComponentKind::Faq]);
        assert!(table.starts_with("faq"));
        assert!(table.contains("FAQ Section"));
        assert!(table.contains("1 component types"));
    }
}

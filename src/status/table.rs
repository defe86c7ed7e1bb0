//! Render the status table for operators and scripts

use core::str::FromStr;

use super::Code;
use anyhow::Result;
use serde::Serialize;

/// Output format for the status table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Aligned `code  label` lines
    #[default]
    Text,
    /// JSON array of `{code, text}` objects
    Json,
    /// YAML sequence of `{code, text}` mappings
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(format!("Invalid format: {s}. Use 'text', 'json' or 'yaml'")),
        }
    }
}

/// One row of the status table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub code: Code,
    pub text: &'static str,
}

/// All rows of the status table, in code order
#[must_use]
pub fn entries() -> Vec<StatusEntry> {
    Code::ALL
        .into_iter()
        .map(|code| StatusEntry {
            code,
            text: code.text(),
        })
        .collect()
}

/// Render the status table in the requested format
///
/// # Errors
///
/// Returns an error if the table cannot be serialized to JSON or YAML
pub fn render_table(format: OutputFormat) -> Result<String> {
    let rows = entries();

    match format {
        OutputFormat::Text => Ok(format_as_text(&rows)),
        OutputFormat::Json => serde_json::to_string_pretty(&rows)
            .map_err(|e| anyhow::anyhow!("Failed to serialize to JSON: {e}")),
        OutputFormat::Yaml => serde_yaml::to_string(&rows)
            .map_err(|e| anyhow::anyhow!("Failed to serialize to YAML: {e}")),
    }
}

fn format_as_text(rows: &[StatusEntry]) -> String {
    rows.iter()
        .map(|row| format!("{:>2}  {}", row.code, row.text))
        .collect::<Vec<_>>()
        .join("\n")
}

//! Output formats

use super::table::Table;
use super::tabular::Tabular;
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Default,
    /// Column-aligned table
    Table,
    /// Indented JSON
    Json,
    /// Block-style YAML
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Default => "default",
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

/// Render a summary collection; the result always ends with a newline
pub fn render<T>(items: &[T], format: OutputFormat) -> Result<String>
where
    T: Tabular + Serialize,
{
    match format {
        OutputFormat::Default => Ok(T::plain(items)),
        OutputFormat::Table => {
            let mut table = Table::new(T::HEADERS.iter().copied());
            for item in items {
                table.push(item.row());
            }
            Ok(table.render())
        }
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(items)
                .map_err(|e| Error::serialization(format.to_string(), e))?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(items).map_err(|e| Error::serialization(format.to_string(), e))
        }
    }
}

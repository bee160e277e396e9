//! Table rows and plain listings per summary type

use crate::normalize::{FieldSummary, ItemSummary, ProjectSummary};
use std::fmt::Write as _;

/// Separator for multi-valued table cells
const CELL_SEPARATOR: &str = " | ";

/// A summary that can be shown as a table row and a plain listing
pub trait Tabular: Sized {
    /// Header row of the table
    const HEADERS: &'static [&'static str];

    /// Table cells for this summary
    fn row(&self) -> Vec<String>;

    /// Plain human-readable listing of a collection
    fn plain(items: &[Self]) -> String;
}

impl Tabular for ProjectSummary {
    const HEADERS: &'static [&'static str] = &["ID", "Number", "Title"];

    fn row(&self) -> Vec<String> {
        vec![self.id.clone(), self.number.to_string(), self.title.clone()]
    }

    fn plain(items: &[Self]) -> String {
        let mut out = String::from("Projects:\n");
        for project in items {
            let _ = writeln!(out, "{} {} {}", project.id, project.number, project.title);
        }
        out
    }
}

impl Tabular for ItemSummary {
    const HEADERS: &'static [&'static str] = &["ID", "Title", "Details"];

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.field_values.join(CELL_SEPARATOR),
        ]
    }

    fn plain(items: &[Self]) -> String {
        let mut out = String::new();
        for item in items {
            let _ = writeln!(out, "ID: {}, Title: {}", item.id, item.title);
            for detail in &item.field_values {
                let _ = writeln!(out, "{detail}");
            }
            out.push('\n');
        }
        out
    }
}

impl Tabular for FieldSummary {
    const HEADERS: &'static [&'static str] = &[
        "Kind",
        "ID",
        "Name",
        "DataType",
        "IterationConfigs",
        "Options",
    ];

    fn row(&self) -> Vec<String> {
        let configs: Vec<String> = self
            .iteration_configs
            .iter()
            .flatten()
            .map(|cfg| format!("{} ({})", cfg.title, cfg.start_date))
            .collect();
        let options: Vec<&str> = self
            .options
            .iter()
            .flatten()
            .map(|opt| opt.name.as_str())
            .collect();

        vec![
            self.kind.clone(),
            self.id.clone(),
            self.name.clone(),
            self.data_type.clone(),
            configs.join(CELL_SEPARATOR),
            options.join(CELL_SEPARATOR),
        ]
    }

    fn plain(items: &[Self]) -> String {
        let mut out = String::from("Fields:\n");
        for field in items {
            let _ = writeln!(out, "• {}", field.kind);
            let _ = writeln!(out, "   ID: {}", field.id);
            let _ = writeln!(out, "   Name: {}", field.name);
            let _ = writeln!(out, "   DataType: {}", field.data_type);

            if let Some(configs) = field.iteration_configs.as_deref().filter(|c| !c.is_empty()) {
                out.push_str("   Iteration Configs:\n");
                for cfg in configs {
                    let _ = writeln!(
                        out,
                        "     - {} (ID: {}, Start: {}, Duration: {})",
                        cfg.title, cfg.id, cfg.start_date, cfg.duration
                    );
                }
            }

            if let Some(options) = field.options.as_deref().filter(|o| !o.is_empty()) {
                out.push_str("   Options:\n");
                for opt in options {
                    let _ = writeln!(
                        out,
                        "     - {} (ID: {}, Color: {}, Description: {})",
                        opt.name, opt.id, opt.color, opt.description
                    );
                }
            }

            out.push('\n');
        }
        out
    }
}

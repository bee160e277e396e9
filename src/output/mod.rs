//! Output module
//!
//! Renders summary collections for the terminal.
//!
//! # Overview
//!
//! - `default`: a plain human-readable listing
//! - `table`: column-aligned text with a fixed header row per resource
//! - `json`: indented JSON, round-trips back to the summaries
//! - `yaml`: block-style YAML, round-trips back to the summaries

mod format;
mod table;
mod tabular;

pub use format::{render, OutputFormat};
pub use table::Table;
pub use tabular::Tabular;

#[cfg(test)]
mod tests;

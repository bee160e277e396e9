//! Normalization of raw records into summaries
//!
//! Summaries are detached, serialization-ready values with one stable
//! shape per resource kind. Unrecognised variants degrade to a labelled
//! placeholder and never fail a page.

mod fields;
mod items;
mod types;

pub use fields::{summarize_field, summarize_fields};
pub use items::{render_field_value, summarize_item, summarize_items, UNKNOWN_FIELD_NAME, UNRENDERABLE};
pub use types::{FieldSummary, ItemSummary, IterationConfig, ProjectSummary, SelectOption};

use crate::model::ProjectRecord;

/// Summarize a page of projects
pub fn summarize_projects(records: Vec<ProjectRecord>) -> Vec<ProjectSummary> {
    records.into_iter().map(ProjectSummary::from).collect()
}

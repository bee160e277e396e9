//! Summary types

use crate::model::{Iteration, ProjectRecord, SingleSelectOption};
use serde::{Deserialize, Serialize};

/// A project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub number: u32,
    pub title: String,
}

impl From<ProjectRecord> for ProjectSummary {
    fn from(record: ProjectRecord) -> Self {
        Self {
            id: record.id,
            number: record.number,
            title: record.title,
        }
    }
}

/// An issue item and its rendered field values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub id: String,
    pub title: String,
    /// One `"<field>: <value>"` line per field value, in source order
    pub field_values: Vec<String>,
}

/// One configured iteration of an iteration field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationConfig {
    pub id: String,
    pub title: String,
    pub start_date: String,
    pub duration: u32,
}

impl From<Iteration> for IterationConfig {
    fn from(iteration: Iteration) -> Self {
        Self {
            id: iteration.id,
            title: iteration.title,
            start_date: iteration.start_date,
            duration: iteration.duration,
        }
    }
}

/// One option of a single-select field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
    pub color: String,
    pub description: String,
}

impl From<SingleSelectOption> for SelectOption {
    fn from(option: SingleSelectOption) -> Self {
        Self {
            id: option.id,
            name: option.name,
            color: option.color,
            description: option.description,
        }
    }
}

/// A field definition of any kind.
///
/// `iteration_configs` and `options` are `None` unless the source field
/// has at least one entry; absent lists are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub kind: String,
    pub id: String,
    pub name: String,
    pub data_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iteration_configs: Option<Vec<IterationConfig>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
}

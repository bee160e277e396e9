//! Project field definitions

use super::de::nullable;
use serde::{Deserialize, Serialize};

/// A field defined on a project, one case per field type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldDefinition {
    Basic(BasicField),
    Iteration(IterationField),
    SingleSelect(SingleSelectField),
    Unknown { typename: String },
}

typename_dispatch!(FieldDefinition {
    "ProjectV2Field" => Basic,
    "ProjectV2IterationField" => Iteration,
    "ProjectV2SingleSelectField" => SingleSelect,
});

/// A field without type-specific configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicField {
    pub id: String,
    pub name: String,
    /// Data type, e.g. `TEXT`, `DATE` or `ASSIGNEES`
    pub data_type: String,
}

/// An iteration field and its configured iterations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationField {
    pub id: String,
    pub name: String,
    pub data_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub configuration: IterationConfiguration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationConfiguration {
    #[serde(default, deserialize_with = "nullable")]
    pub iterations: Vec<Iteration>,
}

/// One configured iteration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Iteration {
    pub id: String,
    pub title: String,
    pub start_date: String,
    /// Length in days
    pub duration: u32,
}

/// A single-select field and its options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleSelectField {
    pub id: String,
    pub name: String,
    pub data_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub options: Vec<SingleSelectOption>,
}

/// One option of a single-select field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleSelectOption {
    pub id: String,
    pub name: String,
    /// Color name, e.g. `GREEN`
    #[serde(default, deserialize_with = "nullable")]
    pub color: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
}

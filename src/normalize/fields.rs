//! Field summaries

use super::types::FieldSummary;
use crate::model::FieldDefinition;

/// Summarize a page of field definitions
pub fn summarize_fields(records: Vec<FieldDefinition>) -> Vec<FieldSummary> {
    records.into_iter().map(summarize_field).collect()
}

/// Summarize one field definition
pub fn summarize_field(record: FieldDefinition) -> FieldSummary {
    match record {
        FieldDefinition::Basic(field) => FieldSummary {
            kind: "Basic Field".to_string(),
            id: field.id,
            name: field.name,
            data_type: field.data_type,
            iteration_configs: None,
            options: None,
        },
        FieldDefinition::Iteration(field) => FieldSummary {
            kind: "Iteration Field".to_string(),
            id: field.id,
            name: field.name,
            data_type: field.data_type,
            iteration_configs: non_empty(field.configuration.iterations),
            options: None,
        },
        FieldDefinition::SingleSelect(field) => FieldSummary {
            kind: "Single Select Field".to_string(),
            id: field.id,
            name: field.name,
            data_type: field.data_type,
            iteration_configs: None,
            options: non_empty(field.options),
        },
        FieldDefinition::Unknown { typename } => FieldSummary {
            kind: format!("Unknown field type: {typename}"),
            ..FieldSummary::default()
        },
    }
}

fn non_empty<S, T: From<S>>(source: Vec<S>) -> Option<Vec<T>> {
    if source.is_empty() {
        None
    } else {
        Some(source.into_iter().map(T::from).collect())
    }
}

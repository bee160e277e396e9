//! Item summaries

use super::types::ItemSummary;
use crate::model::{FieldValue, ItemRecord};
use serde::Serialize;

/// Name shown when a value's field reference has an unknown type
pub const UNKNOWN_FIELD_NAME: &str = "Unknown field";

/// Shown in place of a structured payload that fails to serialize
pub const UNRENDERABLE: &str = "<unrenderable>";

/// Summarize a page of items, dropping items whose content is not an issue
pub fn summarize_items(records: Vec<ItemRecord>) -> Vec<ItemSummary> {
    records.into_iter().filter_map(summarize_item).collect()
}

/// Summarize one item, or `None` when its content is not an issue
pub fn summarize_item(record: ItemRecord) -> Option<ItemSummary> {
    let title = record.content.as_ref()?.issue_title()?.to_string();
    let field_values = record
        .field_values
        .nodes
        .iter()
        .map(render_field_value)
        .collect();

    Some(ItemSummary {
        id: record.id,
        title,
        field_values,
    })
}

/// Render one field value as a display line
pub fn render_field_value(value: &FieldValue) -> String {
    let name = value
        .field()
        .and_then(|field| field.name())
        .unwrap_or(UNKNOWN_FIELD_NAME);

    match value {
        FieldValue::Date(v) => format!("{name}: {}", v.date),
        FieldValue::Iteration(v) => format!("{name}: {}", render_structured(v)),
        FieldValue::Labels(v) => {
            let labels: Vec<&str> = v.labels.nodes.iter().map(|l| l.name.as_str()).collect();
            format!("Labels: {}", labels.join(", "))
        }
        FieldValue::Milestone(v) => format!("{name}: {}", render_structured(v)),
        FieldValue::Number(v) => format!("{name}: {}", render_structured(v)),
        FieldValue::PullRequest(v) => format!("{name}: {}", render_structured(v)),
        FieldValue::Repository(v) => format!("{name}: {}", v.repository.name),
        FieldValue::Reviewer(v) => format!("{name}: {}", render_structured(v)),
        FieldValue::SingleSelect(v) => format!("{name}: {}", v.name),
        FieldValue::Text(v) => format!("{name}: {}", v.text),
        FieldValue::Users(v) => {
            let logins: Vec<&str> = v.users.nodes.iter().map(|u| u.login.as_str()).collect();
            format!("{name}: {}", logins.join(", "))
        }
        FieldValue::Unknown { typename } => format!("Unexpected type: {typename}"),
    }
}

/// Compact JSON of a value's payload
pub(crate) fn render_structured<T: Serialize>(payload: &T) -> String {
    serde_json::to_string(payload).unwrap_or_else(|_| UNRENDERABLE.to_string())
}

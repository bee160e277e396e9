//! Tests for output module

use super::*;
use crate::normalize::{FieldSummary, ItemSummary, IterationConfig, ProjectSummary, SelectOption};
use pretty_assertions::assert_eq;

fn projects() -> Vec<ProjectSummary> {
    vec![
        ProjectSummary {
            id: "PVT_1".to_string(),
            number: 1,
            title: "Roadmap".to_string(),
        },
        ProjectSummary {
            id: "PVT_22".to_string(),
            number: 12,
            title: "Bugs".to_string(),
        },
    ]
}

fn items() -> Vec<ItemSummary> {
    vec![ItemSummary {
        id: "PVTI_1".to_string(),
        title: "Fix login".to_string(),
        field_values: vec!["Status: Todo".to_string(), "Labels: bug, ui".to_string()],
    }]
}

fn fields() -> Vec<FieldSummary> {
    vec![
        FieldSummary {
            kind: "Basic Field".to_string(),
            id: "F1".to_string(),
            name: "Title".to_string(),
            data_type: "TITLE".to_string(),
            iteration_configs: None,
            options: None,
        },
        FieldSummary {
            kind: "Iteration Field".to_string(),
            id: "F2".to_string(),
            name: "Sprint".to_string(),
            data_type: "ITERATION".to_string(),
            iteration_configs: Some(vec![IterationConfig {
                id: "i1".to_string(),
                title: "Sprint 1".to_string(),
                start_date: "2024-01-01".to_string(),
                duration: 14,
            }]),
            options: None,
        },
        FieldSummary {
            kind: "Single Select Field".to_string(),
            id: "F3".to_string(),
            name: "Status".to_string(),
            data_type: "SINGLE_SELECT".to_string(),
            iteration_configs: None,
            options: Some(vec![SelectOption {
                id: "o1".to_string(),
                name: "Todo".to_string(),
                color: "GRAY".to_string(),
                description: "Not started".to_string(),
            }]),
        },
    ]
}

// ============================================================================
// Table Tests
// ============================================================================

#[test]
fn test_table_pads_all_but_last_column() {
    let mut table = Table::new(["A", "Long header", "C"]);
    table.push(["xyz", "1", "last cell"]);

    assert_eq!(table.len(), 2);
    assert_eq!(
        table.render(),
        "A    Long header  C\n\
         xyz  1            last cell\n"
    );
}

#[test]
fn test_table_counts_chars_not_bytes() {
    let mut table = Table::new(["Name", "X"]);
    table.push(["Café", "1"]);
    assert_eq!(table.render(), "Name  X\nCafé  1\n");
}

#[test]
fn test_projects_table() {
    let out = render(&projects(), OutputFormat::Table).unwrap();
    assert_eq!(
        out,
        "ID      Number  Title\n\
         PVT_1   1       Roadmap\n\
         PVT_22  12      Bugs\n"
    );
}

#[test]
fn test_items_table_joins_details() {
    let out = render(&items(), OutputFormat::Table).unwrap();
    assert_eq!(
        out,
        "ID      Title      Details\n\
         PVTI_1  Fix login  Status: Todo | Labels: bug, ui\n"
    );
}

#[test]
fn test_empty_collection_table_has_header_only() {
    let out = render::<FieldSummary>(&[], OutputFormat::Table).unwrap();
    assert_eq!(out, "Kind  ID  Name  DataType  IterationConfigs  Options\n");
}

// ============================================================================
// Plain Listing Tests
// ============================================================================

#[test]
fn test_projects_plain() {
    let out = render(&projects(), OutputFormat::Default).unwrap();
    assert_eq!(out, "Projects:\nPVT_1 1 Roadmap\nPVT_22 12 Bugs\n");
}

#[test]
fn test_items_plain() {
    let out = render(&items(), OutputFormat::Default).unwrap();
    assert_eq!(
        out,
        "ID: PVTI_1, Title: Fix login\nStatus: Todo\nLabels: bug, ui\n\n"
    );
}

#[test]
fn test_fields_plain() {
    let out = render(&fields(), OutputFormat::Default).unwrap();
    let expected = "\
Fields:
• Basic Field
   ID: F1
   Name: Title
   DataType: TITLE

• Iteration Field
   ID: F2
   Name: Sprint
   DataType: ITERATION
   Iteration Configs:
     - Sprint 1 (ID: i1, Start: 2024-01-01, Duration: 14)

• Single Select Field
   ID: F3
   Name: Status
   DataType: SINGLE_SELECT
   Options:
     - Todo (ID: o1, Color: GRAY, Description: Not started)

";
    assert_eq!(out, expected);
}

// ============================================================================
// Structured Output Tests
// ============================================================================

#[test]
fn test_json_round_trip() {
    let out = render(&fields(), OutputFormat::Json).unwrap();
    assert!(out.ends_with('\n'));
    assert!(!out.contains("\"options\": null"));

    let parsed: Vec<FieldSummary> = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, fields());
}

#[test]
fn test_yaml_round_trip() {
    let out = render(&items(), OutputFormat::Yaml).unwrap();
    assert!(out.contains("field_values:"));

    let parsed: Vec<ItemSummary> = serde_yaml::from_str(&out).unwrap();
    assert_eq!(parsed, items());
}

#[test]
fn test_output_format_display() {
    assert_eq!(OutputFormat::default(), OutputFormat::Default);
    assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
}

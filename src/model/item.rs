//! Project items and their field values

use super::connection::NodeList;
use super::de::nullable;
use serde::{Deserialize, Serialize};

// ============================================================================
// Item
// ============================================================================

/// A project item with its content and field values
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    /// Global node id of the item
    pub id: String,
    /// Linked content; null when the content is not visible to the viewer
    #[serde(default)]
    pub content: Option<ItemContent>,
    /// Values set on the item, in server order
    #[serde(default)]
    pub field_values: NodeList<FieldValue>,
}

/// Content that carries a title
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Titled {
    /// Content title
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
}

/// Content linked to a project item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemContent {
    Issue(Titled),
    PullRequest(Titled),
    DraftIssue(Titled),
    Unknown { typename: String },
}

typename_dispatch!(ItemContent {
    "Issue" => Issue,
    "PullRequest" => PullRequest,
    "DraftIssue" => DraftIssue,
});

impl ItemContent {
    /// Title of the content when it is an issue
    pub fn issue_title(&self) -> Option<&str> {
        match self {
            ItemContent::Issue(issue) => Some(&issue.title),
            _ => None,
        }
    }
}

// ============================================================================
// Field reference
// ============================================================================

/// Name of a field definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldName {
    /// Display name
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

/// The field definition a value belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRef {
    Field(FieldName),
    IterationField(FieldName),
    SingleSelectField(FieldName),
    Unknown { typename: String },
}

typename_dispatch!(FieldRef {
    "ProjectV2Field" => Field,
    "ProjectV2IterationField" => IterationField,
    "ProjectV2SingleSelectField" => SingleSelectField,
});

impl FieldRef {
    /// Display name of the referenced field
    pub fn name(&self) -> Option<&str> {
        match self {
            FieldRef::Field(f) | FieldRef::IterationField(f) | FieldRef::SingleSelectField(f) => {
                Some(&f.name)
            }
            FieldRef::Unknown { .. } => None,
        }
    }

    /// Reference to a plain field with the given name
    pub fn named(name: impl Into<String>) -> Self {
        FieldRef::Field(FieldName { name: name.into() })
    }
}

impl Default for FieldRef {
    fn default() -> Self {
        FieldRef::Unknown {
            typename: String::new(),
        }
    }
}

// ============================================================================
// Field values
// ============================================================================

/// A value set on an item, one case per value type
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Date(DateValue),
    Iteration(IterationValue),
    Labels(LabelValue),
    Milestone(MilestoneValue),
    Number(NumberValue),
    PullRequest(PullRequestValue),
    Repository(RepositoryValue),
    Reviewer(ReviewerValue),
    SingleSelect(SingleSelectValue),
    Text(TextValue),
    Users(UserValue),
    Unknown { typename: String },
}

typename_dispatch!(FieldValue {
    "ProjectV2ItemFieldDateValue" => Date,
    "ProjectV2ItemFieldIterationValue" => Iteration,
    "ProjectV2ItemFieldLabelValue" => Labels,
    "ProjectV2ItemFieldMilestoneValue" => Milestone,
    "ProjectV2ItemFieldNumberValue" => Number,
    "ProjectV2ItemFieldPullRequestValue" => PullRequest,
    "ProjectV2ItemFieldRepositoryValue" => Repository,
    "ProjectV2ItemFieldReviewerValue" => Reviewer,
    "ProjectV2ItemFieldSingleSelectValue" => SingleSelect,
    "ProjectV2ItemFieldTextValue" => Text,
    "ProjectV2ItemFieldUserValue" => Users,
});

impl FieldValue {
    /// Field the value belongs to, when the value type is known
    pub fn field(&self) -> Option<&FieldRef> {
        match self {
            FieldValue::Date(v) => Some(&v.field),
            FieldValue::Iteration(v) => Some(&v.field),
            FieldValue::Labels(v) => Some(&v.field),
            FieldValue::Milestone(v) => Some(&v.field),
            FieldValue::Number(v) => Some(&v.field),
            FieldValue::PullRequest(v) => Some(&v.field),
            FieldValue::Repository(v) => Some(&v.field),
            FieldValue::Reviewer(v) => Some(&v.field),
            FieldValue::SingleSelect(v) => Some(&v.field),
            FieldValue::Text(v) => Some(&v.field),
            FieldValue::Users(v) => Some(&v.field),
            FieldValue::Unknown { .. } => None,
        }
    }
}

// The `field` reference is skipped when serializing so that a value
// serializes to its payload alone.

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValue {
    #[serde(default, skip_serializing)]
    pub field: FieldRef,
    #[serde(default, deserialize_with = "nullable")]
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationValue {
    #[serde(default, skip_serializing)]
    pub field: FieldRef,
    #[serde(default, deserialize_with = "nullable")]
    pub iteration_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub start_date: String,
    #[serde(default, deserialize_with = "nullable")]
    pub duration: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelValue {
    #[serde(default, skip_serializing)]
    pub field: FieldRef,
    #[serde(default)]
    pub labels: NodeList<Label>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default)]
    pub due_on: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneValue {
    #[serde(default, skip_serializing)]
    pub field: FieldRef,
    #[serde(default)]
    pub milestone: Option<Milestone>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberValue {
    #[serde(default, skip_serializing)]
    pub field: FieldRef,
    #[serde(default, deserialize_with = "nullable")]
    pub number: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    pub number: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestValue {
    #[serde(default, skip_serializing)]
    pub field: FieldRef,
    #[serde(default)]
    pub pull_requests: NodeList<PullRequestRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name_with_owner: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryValue {
    #[serde(default, skip_serializing)]
    pub field: FieldRef,
    #[serde(default)]
    pub repository: Repository,
}

/// A requested reviewer: a user, team or mannequin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reviewer {
    #[serde(rename = "__typename", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewerValue {
    #[serde(default, skip_serializing)]
    pub field: FieldRef,
    #[serde(default)]
    pub reviewers: NodeList<Reviewer>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleSelectValue {
    #[serde(default, skip_serializing)]
    pub field: FieldRef,
    /// Name of the selected option
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default)]
    pub option_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValue {
    #[serde(default, skip_serializing)]
    pub field: FieldRef,
    #[serde(default, deserialize_with = "nullable")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub login: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserValue {
    #[serde(default, skip_serializing)]
    pub field: FieldRef,
    #[serde(default)]
    pub users: NodeList<UserRef>,
}

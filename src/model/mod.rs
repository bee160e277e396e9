//! Raw records returned by the Projects V2 API
//!
//! Polymorphic GraphQL unions and interfaces are decoded once, at
//! deserialization time, into closed enums keyed on `__typename`. Every
//! enum carries an `Unknown` case holding the tag it did not recognise,
//! so a new server-side type never fails a page.

/// Implements `Deserialize` for an enum whose variants are chosen by
/// `__typename`. Unmatched tags, and recognised tags whose payload does
/// not decode, land in `Unknown { typename }`.
macro_rules! typename_dispatch {
    ($name:ident { $($tag:literal => $variant:ident),+ $(,)? }) => {
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                let typename = $crate::model::de::typename_of(&value);
                match typename.as_str() {
                    $($tag => Ok($crate::model::de::decode(value, &typename)
                        .map($name::$variant)
                        .unwrap_or_else(|| $name::Unknown { typename })),)+
                    _ => Ok($name::Unknown { typename }),
                }
            }
        }
    };
}

mod connection;
pub(crate) mod de;
mod field;
mod item;
mod project;

pub use connection::{Connection, Node, NodeList, PageInfo, PROJECT_TYPENAME};
pub use field::{
    BasicField, FieldDefinition, Iteration, IterationConfiguration, IterationField,
    SingleSelectField, SingleSelectOption,
};
pub use item::{
    DateValue, FieldName, FieldRef, FieldValue, ItemContent, ItemRecord, IterationValue, Label,
    LabelValue, Milestone, MilestoneValue, NumberValue, PullRequestRef, PullRequestValue,
    Repository, RepositoryValue, Reviewer, ReviewerValue, SingleSelectValue, TextValue, Titled,
    UserRef, UserValue,
};
pub use project::ProjectRecord;

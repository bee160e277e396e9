//! Connection and node wrappers

use super::de::{non_null_nodes, nullable, typename_of};
use crate::error::{Error, Result};
use crate::types::Cursor;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// GraphQL type name of a project node
pub const PROJECT_TYPENAME: &str = "ProjectV2";

/// Pagination metadata of a connection
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether another page follows this one
    pub has_next_page: bool,
    /// Cursor of the last record; empty when the page has no records
    #[serde(default, deserialize_with = "nullable")]
    pub end_cursor: Cursor,
}

impl PageInfo {
    /// Page info for a final page
    pub fn last() -> Self {
        Self::default()
    }

    /// Page info for a page followed by another
    pub fn next(end_cursor: impl Into<Cursor>) -> Self {
        Self {
            has_next_page: true,
            end_cursor: end_cursor.into(),
        }
    }
}

/// A cursor-paginated collection: one page of nodes plus page info
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    /// Records in server order
    #[serde(default = "Vec::new", deserialize_with = "non_null_nodes")]
    pub nodes: Vec<T>,
    /// Pagination metadata
    pub page_info: PageInfo,
}

impl<T> Connection<T> {
    /// Build a connection from parts
    pub fn new(nodes: Vec<T>, page_info: PageInfo) -> Self {
        Self { nodes, page_info }
    }
}

/// A nested, unpaginated list of nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct NodeList<T> {
    /// Nodes in server order
    #[serde(default = "Vec::new", deserialize_with = "non_null_nodes")]
    pub nodes: Vec<T>,
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T> From<Vec<T>> for NodeList<T> {
    fn from(nodes: Vec<T>) -> Self {
        Self { nodes }
    }
}

/// Result of a `node(id:)` lookup that is expected to be a project
#[derive(Debug, Clone, PartialEq)]
pub enum Node<T> {
    /// The node is a project
    Project(T),
    /// The node exists but has another type
    Other {
        /// GraphQL type name of the node
        typename: String,
    },
    /// No node exists for the id
    Missing,
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Node::Missing
    }
}

impl<T> Node<T> {
    /// Unwrap the project, or fail with an unexpected shape error
    pub fn into_project(self) -> Result<T> {
        match self {
            Node::Project(project) => Ok(project),
            Node::Other { typename } => Err(Error::unexpected_shape(PROJECT_TYPENAME, typename)),
            Node::Missing => Err(Error::unexpected_shape(PROJECT_TYPENAME, "null")),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Node<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(value) = Option::<serde_json::Value>::deserialize(deserializer)? else {
            return Ok(Node::Missing);
        };
        let typename = typename_of(&value);
        if typename == PROJECT_TYPENAME {
            serde_json::from_value(value)
                .map(Node::Project)
                .map_err(serde::de::Error::custom)
        } else {
            Ok(Node::Other { typename })
        }
    }
}

//! Page sources for projects, items and fields

use crate::error::{Error, Result};
use crate::graphql::{queries, GraphqlClient};
use crate::model::{Connection, FieldDefinition, ItemRecord, Node, ProjectRecord};
use crate::pagination::{Page, PageSource};
use crate::types::OwnerType;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// ============================================================================
// Query variables and responses
// ============================================================================

#[derive(Debug, Serialize)]
struct OwnerVariables<'a> {
    login: &'a str,
    first: u32,
    after: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct NodeVariables<'a> {
    id: &'a str,
    first: u32,
    after: Option<&'a str>,
}

/// The empty cursor is sent as null
fn after_arg(after: &str) -> Option<&str> {
    (!after.is_empty()).then_some(after)
}

#[derive(Debug, Deserialize)]
struct OwnerData {
    owner: Option<OwnerProjects>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OwnerProjects {
    projects_v2: Connection<ProjectRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct NodeData<T> {
    #[serde(default)]
    node: Node<T>,
}

#[derive(Debug, Deserialize)]
struct ProjectItems {
    items: Connection<ItemRecord>,
}

#[derive(Debug, Deserialize)]
struct ProjectFields {
    fields: Connection<FieldDefinition>,
}

// ============================================================================
// Projects
// ============================================================================

/// Projects owned by a user or organization
pub struct ProjectsSource<'a> {
    client: &'a GraphqlClient,
    owner: String,
    owner_type: OwnerType,
    resource: String,
}

impl<'a> ProjectsSource<'a> {
    /// Create a source for an owner's projects
    pub fn new(client: &'a GraphqlClient, owner: impl Into<String>, owner_type: OwnerType) -> Self {
        let owner = owner.into();
        Self {
            client,
            resource: format!("projects of {owner_type} '{owner}'"),
            owner,
            owner_type,
        }
    }
}

#[async_trait]
impl PageSource for ProjectsSource<'_> {
    type Record = ProjectRecord;

    fn resource(&self) -> &str {
        &self.resource
    }

    async fn fetch(&self, after: &str, page_size: u32) -> Result<Page<ProjectRecord>> {
        let variables = OwnerVariables {
            login: &self.owner,
            first: page_size,
            after: after_arg(after),
        };
        let data: OwnerData = self
            .client
            .execute(queries::projects_query(self.owner_type), variables)
            .await?;

        data.owner
            .map(|owner| owner.projects_v2)
            .ok_or_else(|| Error::unexpected_shape(self.owner_type.type_name(), "null"))
    }
}

// ============================================================================
// Items
// ============================================================================

/// Items of a project
pub struct ItemsSource<'a> {
    client: &'a GraphqlClient,
    project_id: String,
    resource: String,
}

impl<'a> ItemsSource<'a> {
    /// Create a source for a project's items
    pub fn new(client: &'a GraphqlClient, project_id: impl Into<String>) -> Self {
        let project_id = project_id.into();
        Self {
            client,
            resource: format!("items of project {project_id}"),
            project_id,
        }
    }
}

#[async_trait]
impl PageSource for ItemsSource<'_> {
    type Record = ItemRecord;

    fn resource(&self) -> &str {
        &self.resource
    }

    async fn fetch(&self, after: &str, page_size: u32) -> Result<Page<ItemRecord>> {
        let variables = NodeVariables {
            id: &self.project_id,
            first: page_size,
            after: after_arg(after),
        };
        let data: NodeData<ProjectItems> = self
            .client
            .execute(queries::PROJECT_ITEMS, variables)
            .await?;

        Ok(data.node.into_project()?.items)
    }
}

// ============================================================================
// Fields
// ============================================================================

/// Field definitions of a project
pub struct FieldsSource<'a> {
    client: &'a GraphqlClient,
    project_id: String,
    resource: String,
}

impl<'a> FieldsSource<'a> {
    /// Create a source for a project's fields
    pub fn new(client: &'a GraphqlClient, project_id: impl Into<String>) -> Self {
        let project_id = project_id.into();
        Self {
            client,
            resource: format!("fields of project {project_id}"),
            project_id,
        }
    }
}

#[async_trait]
impl PageSource for FieldsSource<'_> {
    type Record = FieldDefinition;

    fn resource(&self) -> &str {
        &self.resource
    }

    async fn fetch(&self, after: &str, page_size: u32) -> Result<Page<FieldDefinition>> {
        let variables = NodeVariables {
            id: &self.project_id,
            first: page_size,
            after: after_arg(after),
        };
        let data: NodeData<ProjectFields> = self
            .client
            .execute(queries::PROJECT_FIELDS, variables)
            .await?;

        Ok(data.node.into_project()?.fields)
    }
}

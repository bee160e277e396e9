//! Paginated project resources
//!
//! Each resource kind has a `PageSource` that runs its query for one
//! cursor. The `list_*` functions drain a source with the `Paginator` and
//! normalize each page as it arrives.

mod sources;

pub use sources::{FieldsSource, ItemsSource, ProjectsSource};

use crate::error::Result;
use crate::graphql::GraphqlClient;
use crate::normalize::{
    summarize_fields, summarize_items, summarize_projects, FieldSummary, ItemSummary,
    ProjectSummary,
};
use crate::pagination::Paginator;
use crate::types::OwnerType;

/// List every project of an owner
pub async fn list_projects(
    client: &GraphqlClient,
    paginator: &Paginator,
    owner: &str,
    owner_type: OwnerType,
) -> Result<Vec<ProjectSummary>> {
    let source = ProjectsSource::new(client, owner, owner_type);
    paginator.collect_with(&source, summarize_projects).await
}

/// List every issue item of a project
pub async fn list_items(
    client: &GraphqlClient,
    paginator: &Paginator,
    project_id: &str,
) -> Result<Vec<ItemSummary>> {
    let source = ItemsSource::new(client, project_id);
    paginator.collect_with(&source, summarize_items).await
}

/// List every field definition of a project
pub async fn list_fields(
    client: &GraphqlClient,
    paginator: &Paginator,
    project_id: &str,
) -> Result<Vec<FieldSummary>> {
    let source = FieldsSource::new(client, project_id);
    paginator.collect_with(&source, summarize_fields).await
}

//! Query documents for the GitHub Projects V2 API
//!
//! Every paginated query takes `$first: Int!` and `$after: String`; a
//! null `$after` starts from the beginning of the connection.

use crate::types::OwnerType;

/// Projects owned by a user
pub const USER_PROJECTS: &str = r"
query GetUserProjects($login: String!, $first: Int!, $after: String) {
  owner: user(login: $login) {
    projectsV2(first: $first, after: $after) {
      nodes { id number title }
      pageInfo { hasNextPage endCursor }
    }
  }
}
";

/// Projects owned by an organization
pub const ORGANIZATION_PROJECTS: &str = r"
query GetOrganizationProjects($login: String!, $first: Int!, $after: String) {
  owner: organization(login: $login) {
    projectsV2(first: $first, after: $after) {
      nodes { id number title }
      pageInfo { hasNextPage endCursor }
    }
  }
}
";

/// Items of a project, with their field values
pub const PROJECT_ITEMS: &str = r"
query GetProjectItems($id: ID!, $first: Int!, $after: String) {
  node(id: $id) {
    __typename
    ... on ProjectV2 {
      items(first: $first, after: $after) {
        nodes {
          id
          content {
            __typename
            ... on Issue { title }
            ... on PullRequest { title }
            ... on DraftIssue { title }
          }
          fieldValues(first: 50) {
            nodes {
              __typename
              ... on ProjectV2ItemFieldDateValue { date field { ...FieldName } }
              ... on ProjectV2ItemFieldIterationValue {
                iterationId title startDate duration field { ...FieldName }
              }
              ... on ProjectV2ItemFieldLabelValue {
                labels(first: 50) { nodes { name } } field { ...FieldName }
              }
              ... on ProjectV2ItemFieldMilestoneValue {
                milestone { title dueOn } field { ...FieldName }
              }
              ... on ProjectV2ItemFieldNumberValue { number field { ...FieldName } }
              ... on ProjectV2ItemFieldPullRequestValue {
                pullRequests(first: 20) { nodes { number title url } } field { ...FieldName }
              }
              ... on ProjectV2ItemFieldRepositoryValue {
                repository { name nameWithOwner } field { ...FieldName }
              }
              ... on ProjectV2ItemFieldReviewerValue {
                reviewers(first: 20) {
                  nodes {
                    __typename
                    ... on User { login }
                    ... on Team { name }
                    ... on Mannequin { login }
                  }
                }
                field { ...FieldName }
              }
              ... on ProjectV2ItemFieldSingleSelectValue { name optionId field { ...FieldName } }
              ... on ProjectV2ItemFieldTextValue { text field { ...FieldName } }
              ... on ProjectV2ItemFieldUserValue {
                users(first: 50) { nodes { login } } field { ...FieldName }
              }
            }
          }
        }
        pageInfo { hasNextPage endCursor }
      }
    }
  }
}

fragment FieldName on ProjectV2FieldConfiguration {
  __typename
  ... on ProjectV2Field { name }
  ... on ProjectV2IterationField { name }
  ... on ProjectV2SingleSelectField { name }
}
";

/// Field definitions of a project
pub const PROJECT_FIELDS: &str = r"
query GetProjectFields($id: ID!, $first: Int!, $after: String) {
  node(id: $id) {
    __typename
    ... on ProjectV2 {
      fields(first: $first, after: $after) {
        nodes {
          __typename
          ... on ProjectV2Field { id name dataType }
          ... on ProjectV2IterationField {
            id name dataType
            configuration { iterations { id title startDate duration } }
          }
          ... on ProjectV2SingleSelectField {
            id name dataType
            options { id name color description }
          }
        }
        pageInfo { hasNextPage endCursor }
      }
    }
  }
}
";

/// Projects query for the given owner type
pub fn projects_query(owner_type: OwnerType) -> &'static str {
    match owner_type {
        OwnerType::User => USER_PROJECTS,
        OwnerType::Organization => ORGANIZATION_PROJECTS,
    }
}

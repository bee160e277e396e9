//! GraphQL request and response envelopes

use serde::{Deserialize, Serialize};

/// Request body sent to a GraphQL endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest<'a, V: Serialize> {
    /// Query document
    pub query: &'a str,
    /// Query variables
    pub variables: V,
}

/// Response envelope returned by a GraphQL endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlResponse<T> {
    /// Query result, absent when the query failed outright
    pub data: Option<T>,
    /// Errors reported by the server
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

/// A single GraphQL error
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphqlError {
    /// Human-readable message
    pub message: String,
    /// Machine-readable error type (GitHub extension)
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl GraphqlError {
    /// Message prefixed by the error type when one is present
    pub fn describe(&self) -> String {
        match &self.kind {
            Some(kind) => format!("{kind}: {}", self.message),
            None => self.message.clone(),
        }
    }
}

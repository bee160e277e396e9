//! GraphQL client over the authenticated HTTP transport

use super::types::{GraphqlRequest, GraphqlResponse};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Executes GraphQL queries against a single endpoint
#[derive(Debug)]
pub struct GraphqlClient {
    http: HttpClient,
    endpoint: String,
}

impl GraphqlClient {
    /// Create a client for an endpoint using an existing transport
    pub fn new(http: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Create a client from the runtime config
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(HttpClient::from_config(config)?, &config.endpoint))
    }

    /// Endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a query and decode its `data` payload.
    ///
    /// Any entry in `errors` fails the whole call, even when partial
    /// `data` is present.
    pub async fn execute<V, T>(&self, query: &str, variables: V) -> Result<T>
    where
        V: Serialize + Send,
        T: DeserializeOwned,
    {
        let request = GraphqlRequest { query, variables };
        let body = self.http.post_json(&self.endpoint, &request).await?;

        let response: GraphqlResponse<T> = serde_json::from_str(&body)
            .map_err(|e| Error::decode(format!("Invalid GraphQL response: {e}")))?;

        if !response.errors.is_empty() {
            let messages: Vec<String> = response.errors.iter().map(|e| e.describe()).collect();
            warn!("GraphQL query returned {} error(s)", messages.len());
            return Err(Error::classify_graphql(messages));
        }

        debug!("GraphQL query succeeded");
        response
            .data
            .ok_or_else(|| Error::fetch("GraphQL response contained no data"))
    }
}

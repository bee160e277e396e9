//! GraphQL query execution
//!
//! Given a query document and its variables, `GraphqlClient` returns the
//! typed `data` payload or a classified error. The query documents for
//! the three paginated resources live in [`queries`].

mod client;
pub mod queries;
mod types;

pub use client::GraphqlClient;
pub use types::{GraphqlError, GraphqlRequest, GraphqlResponse};

#[cfg(test)]
mod tests;

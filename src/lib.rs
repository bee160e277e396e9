// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # projectctl
//!
//! Lists GitHub Projects V2 data: the projects of an owner, the issue
//! items of a project, and its field definitions.
//!
//! ## Features
//!
//! - **Cursor Pagination**: Every connection is drained page by page, in order
//! - **Typed Variants**: Polymorphic GraphQL nodes decode into closed enums
//! - **Graceful Degradation**: Unrecognised variants render as labelled placeholders
//! - **Output Forms**: Plain listing, aligned table, JSON or YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use projectctl::{list_items, Config, GraphqlClient, Paginator, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::from_env()?;
//!     let client = GraphqlClient::from_config(&config)?;
//!     let paginator = Paginator::from_config(&config);
//!
//!     for item in list_items(&client, &paginator, "PVT_kwDOA").await? {
//!         println!("{}: {}", item.id, item.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │   CLI: projects / items / fields  →  output (plain|table|…)  │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────┬────────────┬─────┴──────┬─────────────┬──────────┐
//! │   Auth   │    HTTP    │  GraphQL   │  Paginate   │ Normalize│
//! ├──────────┼────────────┼────────────┼─────────────┼──────────┤
//! │ Bearer   │ POST JSON  │ Queries    │ PageSource  │ Items    │
//! │          │ Timeout    │ Errors     │ Paginator   │ Fields   │
//! │          │ Status map │ Model      │ Page cap    │ Projects │
//! └──────────┴────────────┴────────────┴─────────────┴──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication
pub mod auth;

/// Runtime configuration
pub mod config;

/// HTTP transport
pub mod http;

/// GraphQL client and query documents
pub mod graphql;

/// Raw GraphQL response model
pub mod model;

/// Cursor pagination
pub mod pagination;

/// Normalization of raw records into summaries
pub mod normalize;

/// Paginated project resources
pub mod resources;

/// Output rendering
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::Config;
pub use error::{Error, Result};
pub use graphql::GraphqlClient;
pub use normalize::{FieldSummary, ItemSummary, ProjectSummary};
pub use output::OutputFormat;
pub use pagination::Paginator;
pub use resources::{list_fields, list_items, list_projects};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

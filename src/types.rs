//! Common types used throughout projectctl
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// Opaque pagination position. The empty string means "start".
pub type Cursor = String;

// ============================================================================
// Defaults
// ============================================================================

/// Records requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// GitHub GraphQL endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

// ============================================================================
// Owner Type
// ============================================================================

/// Kind of account that owns a set of projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OwnerType {
    /// A personal account
    #[default]
    User,
    /// An organization account
    Organization,
}

impl OwnerType {
    /// GraphQL root field used to look up this owner
    pub fn root_field(self) -> &'static str {
        match self {
            OwnerType::User => "user",
            OwnerType::Organization => "organization",
        }
    }

    /// GraphQL type name of this owner
    pub fn type_name(self) -> &'static str {
        match self {
            OwnerType::User => "User",
            OwnerType::Organization => "Organization",
        }
    }
}

impl fmt::Display for OwnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root_field())
    }
}

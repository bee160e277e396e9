//! Project records

use serde::{Deserialize, Serialize};

/// A project as listed for an owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Global node id
    pub id: String,
    /// Project number within the owner
    pub number: u32,
    /// Project title
    pub title: String,
}

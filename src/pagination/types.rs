//! Pagination types and traits

use crate::error::Result;
use crate::model::Connection;
use crate::types::Cursor;
use async_trait::async_trait;

/// One fetched page: records in server order plus page info
pub type Page<T> = Connection<T>;

/// A resource that can be fetched one page at a time
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Raw record type on each page
    type Record: Send;

    /// Resource name used in logs and errors
    fn resource(&self) -> &str;

    /// Fetch the page that starts after `after` (empty = first page)
    async fn fetch(&self, after: &str, page_size: u32) -> Result<Page<Self::Record>>;
}

/// Tracks pagination state during one collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Cursor for the next request
    pub cursor: Cursor,
    /// Pages fetched so far
    pub pages: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fetched page
    pub fn add_page(&mut self, records: usize) {
        self.pages += 1;
        self.total_fetched += records as u64;
    }

    /// Set cursor
    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}

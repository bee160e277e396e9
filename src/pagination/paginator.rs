//! Cursor paginator

use super::types::{PageSource, PaginationState};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::DEFAULT_PAGE_SIZE;
use tracing::{debug, info};

/// Drives a `PageSource` until the connection is exhausted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: u32,
    max_pages: Option<u32>,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Paginator {
    /// Create a paginator with no page cap
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            max_pages: None,
        }
    }

    /// Create a paginator from the runtime config
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.page_size).with_max_pages(config.max_pages)
    }

    /// Stop with an error instead of requesting more than `max_pages` pages
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Records requested per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Page cap, if any
    pub fn max_pages(&self) -> Option<u32> {
        self.max_pages
    }

    /// Fetch every page and return all records in fetch order
    pub async fn collect<S>(&self, source: &S) -> Result<Vec<S::Record>>
    where
        S: PageSource + ?Sized,
    {
        self.collect_with(source, |records| records).await
    }

    /// Fetch every page, transforming each page's records as it arrives.
    ///
    /// The first error aborts the collection; records gathered from
    /// earlier pages are dropped with it.
    pub async fn collect_with<S, T, F>(&self, source: &S, mut transform: F) -> Result<Vec<T>>
    where
        S: PageSource + ?Sized,
        T: Send,
        F: FnMut(Vec<S::Record>) -> Vec<T> + Send,
    {
        let mut state = PaginationState::new();
        let mut collected = Vec::new();

        while !state.done {
            let page = source.fetch(&state.cursor, self.page_size).await?;
            let record_count = page.nodes.len();
            state.add_page(record_count);

            debug!(
                "{}: page {} fetched {} records (after '{}')",
                source.resource(),
                state.pages,
                record_count,
                state.cursor
            );

            collected.extend(transform(page.nodes));

            if !page.page_info.has_next_page {
                state.mark_done();
                continue;
            }

            if let Some(max) = self.max_pages {
                if state.pages >= max {
                    return Err(Error::fetch(format!(
                        "{} still had more pages after the limit of {max}",
                        source.resource()
                    )));
                }
            }

            state.set_cursor(page.page_info.end_cursor);
        }

        info!(
            "{}: fetched {} records in {} pages",
            source.resource(),
            state.total_fetched,
            state.pages
        );

        Ok(collected)
    }
}

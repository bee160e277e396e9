//! Pagination module
//!
//! Drains a cursor-paginated connection into one ordered collection.
//!
//! # Overview
//!
//! A `PageSource` fetches one page for a cursor. The `Paginator` calls it
//! with the empty cursor, then with each page's `end_cursor` until a page
//! reports `has_next_page = false`. Pages are fetched strictly one after
//! another because each cursor comes from the previous response.
//!
//! Termination depends on the server eventually reporting no next page.
//! A server that always reports another page keeps the loop running
//! unless `max_pages` is set.

mod paginator;
mod types;

pub use paginator::Paginator;
pub use types::{Page, PageSource, PaginationState};

#[cfg(test)]
mod tests;

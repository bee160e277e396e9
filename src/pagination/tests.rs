//! Tests for pagination module

use super::*;
use crate::error::{Error, Result};
use crate::model::PageInfo;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays scripted pages and records every cursor it is asked for
struct ScriptedSource {
    pages: Mutex<VecDeque<Result<Page<u32>>>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl ScriptedSource {
    fn new(pages: Vec<Result<Page<u32>>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn cursors(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(cursor, _)| cursor.clone())
            .collect()
    }
}

#[async_trait]
impl PageSource for ScriptedSource {
    type Record = u32;

    fn resource(&self) -> &str {
        "numbers"
    }

    async fn fetch(&self, after: &str, page_size: u32) -> Result<Page<u32>> {
        self.calls
            .lock()
            .unwrap()
            .push((after.to_string(), page_size));
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::fetch("no more scripted pages")))
    }
}

fn page(range: std::ops::Range<u32>, info: PageInfo) -> Result<Page<u32>> {
    Ok(Page::new(range.collect(), info))
}

// ============================================================================
// PaginationState Tests
// ============================================================================

#[test]
fn test_pagination_state_default() {
    let state = PaginationState::new();
    assert_eq!(state.cursor, "");
    assert_eq!(state.pages, 0);
    assert_eq!(state.total_fetched, 0);
    assert!(!state.done);
}

#[test]
fn test_pagination_state_mutations() {
    let mut state = PaginationState::new();

    state.add_page(10);
    state.add_page(3);
    assert_eq!(state.pages, 2);
    assert_eq!(state.total_fetched, 13);

    state.set_cursor("c1".to_string());
    assert_eq!(state.cursor, "c1");

    state.mark_done();
    assert!(state.done);
}

// ============================================================================
// Paginator Tests
// ============================================================================

#[test]
fn test_paginator_defaults() {
    let paginator = Paginator::default();
    assert_eq!(paginator.page_size(), 10);
    assert!(paginator.max_pages().is_none());
}

#[tokio::test]
async fn test_single_page() {
    let source = ScriptedSource::new(vec![page(0..4, PageInfo::last())]);

    let records = Paginator::new(10).collect(&source).await.unwrap();

    assert_eq!(records, vec![0, 1, 2, 3]);
    assert_eq!(source.cursors(), vec![""]);
}

#[tokio::test]
async fn test_empty_connection() {
    let source = ScriptedSource::new(vec![page(0..0, PageInfo::last())]);

    let records = Paginator::new(10).collect(&source).await.unwrap();

    assert!(records.is_empty());
    assert_eq!(source.cursors().len(), 1);
}

#[tokio::test]
async fn test_two_pages_concatenate_in_order() {
    let source = ScriptedSource::new(vec![
        page(0..10, PageInfo::next("c1")),
        page(10..13, PageInfo::last()),
    ]);

    let records = Paginator::new(10).collect(&source).await.unwrap();

    assert_eq!(records, (0..13).collect::<Vec<_>>());
    assert_eq!(source.cursors(), vec!["", "c1"]);
}

#[tokio::test]
async fn test_cursor_threads_through_every_page() {
    let source = ScriptedSource::new(vec![
        page(0..2, PageInfo::next("a")),
        page(2..4, PageInfo::next("b")),
        page(4..6, PageInfo::next("c")),
        page(6..7, PageInfo::last()),
    ]);

    let records = Paginator::new(2).collect(&source).await.unwrap();

    assert_eq!(records.len(), 7);
    assert_eq!(source.cursors(), vec!["", "a", "b", "c"]);
    assert!(source.calls.lock().unwrap().iter().all(|(_, size)| *size == 2));
}

#[tokio::test]
async fn test_error_discards_earlier_pages() {
    let source = ScriptedSource::new(vec![
        page(0..10, PageInfo::next("c1")),
        page(10..20, PageInfo::next("c2")),
        Err(Error::fetch("connection reset")),
        page(20..25, PageInfo::last()),
    ]);

    let err = Paginator::new(10).collect(&source).await.unwrap_err();

    assert!(matches!(err, Error::Fetch { ref message } if message == "connection reset"));
    assert_eq!(source.cursors(), vec!["", "c1", "c2"]);
}

#[tokio::test]
async fn test_unexpected_shape_stops_pagination() {
    let source = ScriptedSource::new(vec![
        Err(Error::unexpected_shape("ProjectV2", "Issue")),
        page(0..3, PageInfo::last()),
    ]);

    let err = Paginator::new(10).collect(&source).await.unwrap_err();

    assert!(matches!(err, Error::UnexpectedShape { .. }));
    assert_eq!(source.cursors().len(), 1);
}

#[tokio::test]
async fn test_max_pages_stops_runaway_connection() {
    let source = ScriptedSource::new(vec![
        page(0..1, PageInfo::next("a")),
        page(1..2, PageInfo::next("b")),
        page(2..3, PageInfo::next("c")),
    ]);

    let err = Paginator::new(1)
        .with_max_pages(Some(2))
        .collect(&source)
        .await
        .unwrap_err();

    assert!(err.is_fetch_error());
    assert_eq!(source.cursors(), vec!["", "a"]);
}

#[tokio::test]
async fn test_max_pages_allows_exact_fit() {
    let source = ScriptedSource::new(vec![
        page(0..1, PageInfo::next("a")),
        page(1..2, PageInfo::last()),
    ]);

    let records = Paginator::new(1)
        .with_max_pages(Some(2))
        .collect(&source)
        .await
        .unwrap();

    assert_eq!(records, vec![0, 1]);
}

#[tokio::test]
async fn test_collect_with_transforms_each_page() {
    let source = ScriptedSource::new(vec![
        page(0..3, PageInfo::next("c1")),
        page(3..5, PageInfo::last()),
    ]);

    let mut page_sizes = Vec::new();
    let records = Paginator::new(3)
        .collect_with(&source, |records| {
            page_sizes.push(records.len());
            records
                .into_iter()
                .filter(|n| n % 2 == 0)
                .map(|n| format!("#{n}"))
                .collect()
        })
        .await
        .unwrap();

    assert_eq!(records, vec!["#0", "#2", "#4"]);
    assert_eq!(page_sizes, vec![3, 2]);
}

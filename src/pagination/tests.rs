//! Tests for pagination module

use super::*;
use crate::error::{Error, Result};
use crate::types::PageResponse;
use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays scripted pages and records the offsets it was asked for.
/// `None` entries fail with a 503.
struct ScriptedSource {
    pages: Mutex<VecDeque<Option<PageResponse>>>,
    offsets: Mutex<Vec<u64>>,
    queries: Mutex<Vec<String>>,
}

impl ScriptedSource {
    fn new(pages: Vec<Option<PageResponse>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            offsets: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
        }
    }

    fn offsets(&self) -> Vec<u64> {
        self.offsets.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for ScriptedSource {
    async fn fetch_page(&self, query: &str, start: u64) -> Result<PageResponse> {
        self.offsets.lock().unwrap().push(start);
        self.queries.lock().unwrap().push(query.to_string());
        match self.pages.lock().unwrap().pop_front() {
            Some(Some(page)) => Ok(page),
            Some(None) => Err(Error::http_status(503, "unavailable")),
            None => panic!("unexpected fetch at offset {start}"),
        }
    }
}

fn page(total: u64, first_id: u64, count: u64) -> PageResponse {
    PageResponse {
        total,
        count,
        data: (first_id..first_id + count).map(|id| json!({"id": id})).collect(),
    }
}

// ============================================================================
// Accumulator Tests
// ============================================================================

#[test]
fn test_accumulator_from_first_page() {
    let acc = Accumulator::from_first_page(page(120, 0, 50));
    assert_eq!(acc.total, 120);
    assert_eq!(acc.current_count, 50);
    assert_eq!(acc.records.len(), 50);
    assert_eq!(acc.next_offset(), 50);
    assert!(!acc.is_complete());
}

#[test]
fn test_accumulator_absorb_ignores_later_totals() {
    let mut acc = Accumulator::from_first_page(page(60, 0, 50));
    acc.absorb(page(9999, 50, 10));

    assert_eq!(acc.total, 60);
    assert_eq!(acc.current_count, 60);
    assert!(acc.is_complete());
    assert_eq!(acc.into_records().len(), 60);
}

#[test]
fn test_accumulator_count_saturates() {
    let mut acc = Accumulator::from_first_page(page(120, 0, 50));
    acc.absorb(PageResponse {
        total: 120,
        count: u64::MAX,
        data: vec![],
    });

    assert_eq!(acc.current_count, u64::MAX);
    assert!(acc.is_complete());
}

// ============================================================================
// fetch_all Tests
// ============================================================================

#[tokio::test]
async fn test_fetch_all_three_pages() {
    let source = ScriptedSource::new(vec![
        Some(page(120, 0, 50)),
        Some(page(120, 50, 50)),
        Some(page(120, 100, 20)),
    ]);

    let records = fetch_all(&source, "query=x").await.unwrap();

    assert_eq!(records.len(), 120);
    assert_eq!(records[0]["id"], 0);
    assert_eq!(records[119]["id"], 119);
    assert_eq!(source.offsets(), vec![0, 50, 100]);
    assert!(source
        .queries
        .lock()
        .unwrap()
        .iter()
        .all(|q| q == "query=x"));
}

#[tokio::test]
async fn test_fetch_all_zero_total_single_fetch() {
    let source = ScriptedSource::new(vec![Some(page(0, 0, 0))]);

    let records = fetch_all(&source, "query=x").await.unwrap();

    assert!(records.is_empty());
    assert_eq!(source.offsets(), vec![0]);
}

#[tokio::test]
async fn test_fetch_all_single_complete_page() {
    let source = ScriptedSource::new(vec![Some(page(30, 0, 30))]);

    let records = fetch_all(&source, "q").await.unwrap();

    assert_eq!(records.len(), 30);
    assert_eq!(source.offsets(), vec![0]);
}

#[tokio::test]
async fn test_fetch_all_failure_drops_partial_records() {
    let source = ScriptedSource::new(vec![Some(page(120, 0, 50)), Some(page(120, 50, 50)), None]);

    let result = fetch_all(&source, "q").await;

    assert!(matches!(result, Err(Error::HttpStatus { status: 503, .. })));
    assert_eq!(source.offsets(), vec![0, 50, 100]);
}

#[tokio::test]
async fn test_fetch_all_first_page_failure() {
    let source = ScriptedSource::new(vec![None]);

    let result = fetch_all(&source, "q").await;

    assert!(result.is_err());
    assert_eq!(source.offsets(), vec![0]);
}

#[tokio::test]
async fn test_fetch_all_empty_follow_up_page_fails() {
    let source = ScriptedSource::new(vec![Some(page(120, 0, 50)), Some(page(120, 0, 0))]);

    let result = fetch_all(&source, "q").await;

    assert!(matches!(
        result,
        Err(Error::PaginationStalled {
            offset: 50,
            total: 120
        })
    ));
}

//! Pagination state
//!
//! The accumulator is owned by a single `fetch_all` call and never shared.

use crate::types::{PageResponse, Record};

/// Records gathered so far, the running count and the server-declared total
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    /// Records in arrival order
    pub records: Vec<Record>,
    /// Sum of per-page `count` values; also the offset of the next page
    pub current_count: u64,
    /// Total fixed by the first page
    pub total: u64,
}

impl Accumulator {
    /// Start accumulating from the first page
    pub fn from_first_page(page: PageResponse) -> Self {
        Self {
            records: page.data,
            current_count: page.count,
            total: page.total,
        }
    }

    /// Append a follow-up page. Its `total` is ignored.
    pub fn absorb(&mut self, page: PageResponse) {
        self.records.extend(page.data);
        self.current_count = self.current_count.saturating_add(page.count);
    }

    /// Offset of the next page to fetch
    pub fn next_offset(&self) -> u64 {
        self.current_count
    }

    /// Whether the running count has reached the total
    pub fn is_complete(&self) -> bool {
        self.current_count >= self.total
    }

    /// Consume the accumulator, yielding the records
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

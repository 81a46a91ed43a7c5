//! Count-cursor pagination loop

use super::types::Accumulator;
use crate::error::{Error, Result};
use crate::types::{PageResponse, Record};
use async_trait::async_trait;
use tracing::debug;

/// Source of result pages for a compiled query string
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page starting at `start` for the given query string
    async fn fetch_page(&self, query: &str, start: u64) -> Result<PageResponse>;
}

/// Fetch every record matching `query`
///
/// Pages are requested one after another at offsets 0, then the running
/// count after each page. Any failed fetch fails the whole call and the
/// records gathered so far are dropped.
pub async fn fetch_all<S: PageSource + ?Sized>(source: &S, query: &str) -> Result<Vec<Record>> {
    let first = source.fetch_page(query, 0).await?;
    let mut acc = Accumulator::from_first_page(first);
    debug!("First page: {} of {} records", acc.current_count, acc.total);

    let mut pages = 1;
    while !acc.is_complete() {
        let offset = acc.next_offset();
        let page = source.fetch_page(query, offset).await?;

        if page.count == 0 {
            return Err(Error::PaginationStalled {
                offset,
                total: acc.total,
            });
        }

        acc.absorb(page);
        pages += 1;
        debug!("Page {pages} at offset {offset}: {} of {} records", acc.current_count, acc.total);
    }

    debug!("Fetched {} records in {pages} page(s)", acc.records.len());
    Ok(acc.into_records())
}

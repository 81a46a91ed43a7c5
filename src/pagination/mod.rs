//! Pagination module
//!
//! Exhaustive retrieval of every record matching a compiled query.
//!
//! # Overview
//!
//! The engine issues sequential page fetches through a [`PageSource`],
//! using the running record count as the next offset, until the count
//! reported so far reaches the total declared by the first page.
//!
//! The offset is derived on the client. If the server's result set changes
//! between requests, records can be skipped or repeated; the engine does not
//! try to detect that.

mod engine;
mod types;

pub use engine::{fetch_all, PageSource};
pub use types::Accumulator;

#[cfg(test)]
mod tests;

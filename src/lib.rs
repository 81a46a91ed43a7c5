// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # jobboard-search
//!
//! Query compiler and exhaustive pagination client for a job-board search API.
//!
//! ## Features
//!
//! - **Query Compiler**: Filters and global criteria to query-language strings
//! - **Exhaustive Pagination**: Fetch every matching record using a count cursor
//! - **Grouped Counts**: Filter-option aggregation with field-specific ordering
//! - **Pluggable Transport**: Anything implementing `Transport` can serve requests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jobboard_search::{load_settings, Filter, HttpClient, SearchService, Result};
//! use std::collections::HashSet;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let settings = load_settings("app.json")?;
//!     let service = SearchService::new(HttpClient::new()?, settings)?;
//!
//!     let filter = Filter::new()
//!         .with("state", r#"address.state:"MA""#)
//!         .with("type", vec!["employmentType:Contract", "employmentType:Permanent"]);
//!
//!     let page = service.get_jobs(&filter, Default::default(), 30).await?;
//!     let ids = service.get_current_job_ids(&filter, &HashSet::new()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      SearchService                        │
//! │  get_jobs  open_job  get_current_job_ids  filter_options  │
//! └───────────────────────────────────────────────────────────┘
//!          │                     │                    │
//! ┌────────┴────────┬────────────┴───────┬────────────┴──────┐
//! │      Query      │     Pagination     │       HTTP        │
//! ├─────────────────┼────────────────────┼───────────────────┤
//! │ Criteria        │ Count cursor       │ Transport trait   │
//! │ Filters         │ Accumulator        │ Retry / backoff   │
//! │ Query strings   │ All-or-nothing     │ Rate limit        │
//! └─────────────────┴────────────────────┴───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Filters, responses and shared aliases
pub mod types;

/// Settings loading
pub mod config;

/// Filter and query-string compilation
pub mod query;

/// Count-cursor pagination engine
pub mod pagination;

/// HTTP transport with retry and rate limiting
pub mod http;

/// Job-board search service
pub mod search;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_settings, AdditionalCriteria, ServiceSettings, Settings};
pub use error::{Error, Result};
pub use http::{HttpClient, Transport};
pub use pagination::{fetch_all, PageSource};
pub use query::{QueryCompiler, QueryMode, QueryParams};
pub use search::SearchService;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

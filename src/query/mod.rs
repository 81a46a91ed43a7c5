//! Query compiler module
//!
//! Turns filters and the configured additional criteria into query-language
//! fragments, and flat parameter lists into `key=value&...` query strings.
//!
//! # Overview
//!
//! - `QueryMode` - search (`field:"v"`) vs lookup (`field='v'`) dialect
//! - `QueryCompiler` - criteria injection, filter compilation, request assembly
//! - `QueryParams` - insertion-ordered request parameters

mod compiler;
mod params;

pub use compiler::{
    compile_additional_criteria, compile_filter, group_order_by, normalize_placeholders,
    QueryCompiler, QueryMode, BASE_PREDICATE, ID_PAGE_SIZE,
};
pub use params::{build_query_string, QueryParams};

//! CLI module
//!
//! Command-line interface for the search client.
//!
//! # Commands
//!
//! - `jobs` - Search open jobs (one page)
//! - `job` - Look up a single job
//! - `ids` - Enumerate every matching job id
//! - `options` - Grouped filter-option counts
//! - `query` - Print compiled query strings without sending them

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Log filter for the binary
///
/// INFO everywhere; `verbose` raises only this crate to DEBUG so the HTTP
/// stack stays quiet.
pub fn log_filter(verbose: bool) -> EnvFilter {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    if verbose {
        filter.add_directive(crate_debug_directive())
    } else {
        filter
    }
}

fn crate_debug_directive() -> Directive {
    "jobboard_search=debug"
        .parse()
        .unwrap_or_else(|_| tracing::Level::INFO.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter_targets_crate_only() {
        let verbose = log_filter(true).to_string();
        assert!(verbose.contains("jobboard_search=debug"));
        assert!(!verbose.split(',').any(|d| d == "debug"));
    }

    #[test]
    fn test_default_filter_has_no_debug_directive() {
        let quiet = log_filter(false).to_string();
        assert!(!quiet.contains("jobboard_search=debug"));
        assert!(quiet.contains("info"));
    }
}

//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::{load_settings, Settings};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::query::QueryParams;
use crate::search::SearchService;
use crate::types::Filter;
use serde::Serialize;
use serde_json::json;
use std::collections::HashSet;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let settings = load_settings(&self.cli.settings)?;
        let service = build_service(settings)?;

        match &self.cli.command {
            Commands::Jobs {
                filter,
                count,
                start,
            } => {
                let filter = parse_filter(filter.as_deref())?;
                let mut extra = QueryParams::new();
                if let Some(start) = start {
                    extra.set("start", start);
                }
                print_json(&service.get_jobs(&filter, extra, *count).await?)
            }
            Commands::Job { id } => print_json(&service.open_job(id).await?),
            Commands::Ids { filter, ignore } => {
                let filter = parse_filter(filter.as_deref())?;
                let ids = service
                    .get_current_job_ids(&filter, &ignore_set(ignore))
                    .await?;
                print_json(&ids)
            }
            Commands::Options { field, ids } => {
                print_json(&service.get_available_filter_options(ids, field).await?)
            }
            Commands::Query { filter, ignore } => {
                let filter = parse_filter(filter.as_deref())?;
                let jobs = service.jobs_query_string(
                    &filter,
                    QueryParams::new(),
                    crate::search::DEFAULT_SEARCH_COUNT,
                );
                let ids = service.ids_query_string(&filter, &ignore_set(ignore));
                print_json(&json!({
                    "baseUrl": service.base_url(),
                    "jobs": jobs,
                    "ids": ids,
                }))
            }
        }
    }
}

/// Build a search service backed by the reqwest transport
pub fn build_service(settings: Settings) -> Result<SearchService<HttpClient>> {
    let client = HttpClient::with_config(HttpClientConfig::from_settings(&settings.http))?;
    SearchService::new(client, settings)
}

fn parse_filter(raw: Option<&str>) -> Result<Filter> {
    match raw {
        Some(json) => Filter::from_json(json),
        None => Ok(Filter::new()),
    }
}

fn ignore_set(keys: &[String]) -> HashSet<String> {
    keys.iter().cloned().collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_filter() {
        assert!(parse_filter(None).unwrap().is_empty());
        let filter = parse_filter(Some(r#"{"a": ["x", "y"]}"#)).unwrap();
        assert_eq!(filter.len(), 1);
        assert!(parse_filter(Some("[1, 2]")).is_err());
    }

    #[test]
    fn test_cli_parses_ids_command() {
        let cli = Cli::parse_from([
            "jobboard-search",
            "--settings",
            "conf.yaml",
            "ids",
            "--filter",
            r#"{"state": "address.state:MA"}"#,
            "--ignore",
            "state,city",
        ]);

        assert_eq!(cli.settings.to_str(), Some("conf.yaml"));
        match cli.command {
            Commands::Ids { filter, ignore } => {
                assert!(filter.is_some());
                assert_eq!(ignore, vec!["state".to_string(), "city".to_string()]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parses_options_command() {
        let cli = Cli::parse_from([
            "jobboard-search",
            "options",
            "--field",
            "address(state)",
            "--ids",
            "1,2,3",
        ]);
        match cli.command {
            Commands::Options { field, ids } => {
                assert_eq!(field, "address(state)");
                assert_eq!(ids, vec![1, 2, 3]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

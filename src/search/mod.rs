//! Job-board search service
//!
//! Request-shaping on top of the query compiler, the pagination engine and
//! a [`Transport`]. Every operation fails as a unit: transport errors are
//! returned as-is and no partial results are exposed.
//!
//! # Endpoints
//!
//! - `search/JobOrder` - job search pages and id enumeration
//! - `query/JobBoardPost` - single job lookup and grouped counts

use crate::config::Settings;
use crate::error::Result;
use crate::http::Transport;
use crate::pagination::{fetch_all, PageSource};
use crate::query::{build_query_string, QueryCompiler, QueryParams};
use crate::types::{Filter, JsonValue, PageResponse, QueryResponse, Record};
use async_trait::async_trait;
use std::collections::HashSet;
use std::fmt::Display;
use tracing::{debug, info};

/// Default page size for job searches
pub const DEFAULT_SEARCH_COUNT: u32 = 30;

/// Client for the public job-board REST API
pub struct SearchService<T: Transport> {
    transport: T,
    settings: Settings,
    compiler: QueryCompiler,
    base_url: String,
}

impl<T: Transport> SearchService<T> {
    /// Create a service; fails if the settings cannot produce a base URL
    pub fn new(transport: T, settings: Settings) -> Result<Self> {
        let base_url = settings.service.base_url()?;
        let compiler = QueryCompiler::new(settings.additional_job_criteria.clone());
        Ok(Self {
            transport,
            settings,
            compiler,
            base_url,
        })
    }

    /// The settings this service was built with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn compiler(&self) -> &QueryCompiler {
        &self.compiler
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Query string for a job search page
    pub fn jobs_query_string(&self, filter: &Filter, extra: QueryParams, count: u32) -> String {
        let params = self.compiler.search_params(
            filter,
            extra,
            &self.settings.service.fields,
            count,
            self.settings.default_sort(),
        );
        build_query_string(&params)
    }

    /// Query string enumerating ids, without the `start` offset
    pub fn ids_query_string(&self, filter: &Filter, ignore: &HashSet<String>) -> String {
        build_query_string(&self.compiler.id_params(filter, ignore))
    }

    /// Search open jobs
    ///
    /// `extra` parameters (for example `start`) lead the query string.
    pub async fn get_jobs(
        &self,
        filter: &Filter,
        extra: QueryParams,
        count: u32,
    ) -> Result<JsonValue> {
        let query = self.jobs_query_string(filter, extra, count);
        self.get(&format!("{}/search/JobOrder?{query}", self.base_url))
            .await
    }

    /// Look up a single job board post
    pub async fn open_job(&self, id: impl Display) -> Result<JsonValue> {
        let url = format!(
            "{}/query/JobBoardPost?where=(id={id})&fields={}",
            self.base_url, self.settings.service.fields
        );
        self.get(&url).await
    }

    /// Every id matching `filter`, ignoring the keys in `ignore`
    ///
    /// Fetches as many pages as the reported total requires.
    pub async fn get_current_job_ids(
        &self,
        filter: &Filter,
        ignore: &HashSet<String>,
    ) -> Result<Vec<Record>> {
        let query = self.ids_query_string(filter, ignore);
        let records = fetch_all(self, &query).await?;
        info!("Enumerated {} job ids", records.len());
        Ok(records)
    }

    /// Grouped counts of `field` across the given ids
    ///
    /// An empty id list returns an empty response without a request.
    pub async fn get_available_filter_options(
        &self,
        ids: &[u64],
        field: &str,
    ) -> Result<QueryResponse> {
        if ids.is_empty() {
            debug!("No ids for filter options on {field}, skipping request");
            return Ok(QueryResponse::empty());
        }

        let params = self.compiler.filter_option_params(ids, field);
        let url = format!(
            "{}/query/JobBoardPost?{}",
            self.base_url,
            build_query_string(&params)
        );
        let body = self.get(&url).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn get(&self, url: &str) -> Result<JsonValue> {
        debug!("GET {url}");
        self.transport.get_json(url).await
    }
}

#[async_trait]
impl<T: Transport> PageSource for SearchService<T> {
    async fn fetch_page(&self, query: &str, start: u64) -> Result<PageResponse> {
        let url = format!("{}/search/JobOrder?start={start}&{query}", self.base_url);
        let body = self.get(&url).await?;
        Ok(serde_json::from_value(body)?)
    }
}

impl<T: Transport> std::fmt::Debug for SearchService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchService")
            .field("base_url", &self.base_url)
            .field("criteria", &self.compiler.criteria())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;

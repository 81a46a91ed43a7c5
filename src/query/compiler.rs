//! Filter and criteria compilation
//!
//! Compiled fragments always start with ` AND (` so they can be appended
//! directly to [`BASE_PREDICATE`].

use super::params::QueryParams;
use crate::config::AdditionalCriteria;
use crate::types::{Filter, FilterValue};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Predicate every job query starts with
pub const BASE_PREDICATE: &str = "(isOpen:1) AND (isDeleted:0)";

/// Page size used when enumerating ids
pub const ID_PAGE_SIZE: u32 = 500;

/// Legacy token some filter producers embed in place of the comparison operator
static EQUALS_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\?\^\^equals\}").unwrap());

/// Legacy token some filter producers embed in place of the quote character
static DELIMITER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\?\^\^delimiter\}").unwrap());

/// Query-language dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    /// `/search` endpoints: `field:"value"`
    #[default]
    Search,
    /// `/query` endpoints: `field='value'`
    Lookup,
}

impl QueryMode {
    /// Comparison operator for this dialect
    pub fn operator(self) -> char {
        match self {
            Self::Search => ':',
            Self::Lookup => '=',
        }
    }

    /// String quote character for this dialect
    pub fn quote(self) -> char {
        match self {
            Self::Search => '"',
            Self::Lookup => '\'',
        }
    }
}

/// Compile the configured additional criteria into ` AND (f:"a" OR f:"b")`
///
/// Returns an empty string when no criteria are configured or they are
/// disabled (see [`AdditionalCriteria::is_active`]).
pub fn compile_additional_criteria(
    criteria: Option<&AdditionalCriteria>,
    mode: QueryMode,
) -> String {
    let Some(criteria) = criteria.filter(|c| c.is_active()) else {
        return String::new();
    };

    let op = mode.operator();
    let q = mode.quote();
    let clauses = criteria
        .values
        .iter()
        .map(|value| format!("{}{op}{q}{value}{q}", criteria.field))
        .collect::<Vec<_>>()
        .join(" OR ");

    format!(" AND ({clauses})")
}

/// Compile a filter into AND-joined clauses, skipping ignored keys
///
/// The output goes through [`normalize_placeholders`] before it is returned.
pub fn compile_filter(filter: &Filter, mode: QueryMode, ignore: &HashSet<String>) -> String {
    let mut compiled = String::new();

    for (key, value) in filter.iter() {
        if ignore.contains(key) {
            continue;
        }
        match value {
            FilterValue::Single(clause) => {
                compiled.push_str(&format!(" AND ({clause})"));
            }
            FilterValue::Multiple(clauses) if !clauses.is_empty() => {
                compiled.push_str(&format!(" AND ({})", clauses.join(" OR ")));
            }
            FilterValue::Multiple(_) => {}
        }
    }

    normalize_placeholders(&compiled, mode)
}

/// Replace `{?^^equals}` and `{?^^delimiter}` tokens with the dialect's
/// operator and quote
///
/// Older filter producers emit pre-formatted values containing these tokens
/// so one value can serve both dialects.
pub fn normalize_placeholders(fragment: &str, mode: QueryMode) -> String {
    let op = mode.operator().to_string();
    let q = mode.quote().to_string();
    let replaced = EQUALS_TOKEN.replace_all(fragment, op.as_str());
    DELIMITER_TOKEN.replace_all(&replaced, q.as_str()).into_owned()
}

/// Assembles request parameters for the job-board endpoints
#[derive(Debug, Clone, Default)]
pub struct QueryCompiler {
    criteria: Option<AdditionalCriteria>,
}

impl QueryCompiler {
    /// Create a compiler with optional additional criteria
    pub fn new(criteria: Option<AdditionalCriteria>) -> Self {
        Self { criteria }
    }

    /// The configured additional criteria
    pub fn criteria(&self) -> Option<&AdditionalCriteria> {
        self.criteria.as_ref()
    }

    /// Full search-mode query: base predicate, criteria, then filter clauses
    pub fn search_query(&self, filter: &Filter, ignore: &HashSet<String>) -> String {
        format!(
            "{BASE_PREDICATE}{}{}",
            compile_additional_criteria(self.criteria(), QueryMode::Search),
            compile_filter(filter, QueryMode::Search, ignore)
        )
    }

    /// Parameters for a `/search/JobOrder` page
    ///
    /// Caller-supplied `extra` parameters keep their leading position; the
    /// standard parameters are set after them.
    pub fn search_params(
        &self,
        filter: &Filter,
        extra: QueryParams,
        fields: &str,
        count: u32,
        sort: Option<&str>,
    ) -> QueryParams {
        let mut params = extra;
        params.set("query", self.search_query(filter, &HashSet::new()));
        params.set("fields", fields);
        params.set("count", count);
        if let Some(sort) = sort {
            params.set("sort", sort);
        }
        params.set("showTotalMatched", true);
        params
    }

    /// Parameters for enumerating every matching id
    pub fn id_params(&self, filter: &Filter, ignore: &HashSet<String>) -> QueryParams {
        QueryParams::new()
            .with("query", self.search_query(filter, ignore))
            .with("count", ID_PAGE_SIZE)
            .with("fields", "id")
            .with("sort", "id")
    }

    /// Parameters for a grouped count over the given ids
    pub fn filter_option_params(&self, ids: &[u64], field: &str) -> QueryParams {
        let ids = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        QueryParams::new()
            .with("where", format!("id IN ({ids})"))
            .with("count", ID_PAGE_SIZE)
            .with("fields", format!("{field},count(id)"))
            .with("groupBy", field)
            .with("orderBy", group_order_by(field))
    }
}

/// Sort order for a grouped count, keyed by the exact field expression
pub fn group_order_by(field: &str) -> &'static str {
    match field {
        "publishedCategory(id,name)" => "publishedCategory.name",
        "address(state)" => "address.state",
        "address(city)" => "address.city",
        _ => "-count.id",
    }
}

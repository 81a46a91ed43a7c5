//! Settings for the job-board search client
//!
//! Settings are loaded once at startup (JSON or YAML) and passed explicitly
//! to the search service. They are never mutated afterwards.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

/// Placeholder shipped in template settings for the criteria field
pub const FIELD_PLACEHOLDER: &str = "[ FILTER FIELD HERE ]";

/// Placeholder shipped in template settings for the criteria values
pub const VALUE_PLACEHOLDER: &str = "[ FILTER VALUE HERE ]";

// ============================================================================
// Top-Level Settings
// ============================================================================

/// Complete client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Connection parameters and response fields
    pub service: ServiceSettings,

    /// Mandatory clause injected into every query, if configured
    #[serde(default)]
    pub additional_job_criteria: Option<AdditionalCriteria>,

    /// HTTP transport tuning
    #[serde(default)]
    pub http: HttpSettings,
}

impl Settings {
    /// Create settings with no additional criteria and default HTTP tuning
    pub fn new(service: ServiceSettings) -> Self {
        Self {
            service,
            additional_job_criteria: None,
            http: HttpSettings::default(),
        }
    }

    /// Set the additional criteria
    #[must_use]
    pub fn with_criteria(mut self, criteria: AdditionalCriteria) -> Self {
        self.additional_job_criteria = Some(criteria);
        self
    }

    /// Default sort expression for job searches
    pub fn default_sort(&self) -> Option<&str> {
        self.additional_job_criteria
            .as_ref()
            .and_then(|c| c.sort.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// Validate required settings
    pub fn validate(&self) -> Result<()> {
        if self.service.base_url.is_none() && self.service.corp_token.is_empty() {
            return Err(Error::missing_setting("service.corpToken"));
        }
        if self.service.fields.is_empty() {
            return Err(Error::missing_setting("service.fields"));
        }
        self.service.base_url()?;
        Ok(())
    }
}

// ============================================================================
// Service Settings
// ============================================================================

/// Connection parameters for the public REST service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSettings {
    /// Swimlane number embedded in the host name
    #[serde(default)]
    pub swimlane: String,

    /// Corporation token, the last path segment of the base URL
    #[serde(default)]
    pub corp_token: String,

    /// Port; 443 selects https, anything else http
    #[serde(default)]
    pub port: Option<u16>,

    /// Comma-separated response fields for job searches and lookups
    #[serde(default)]
    pub fields: String,

    /// Full base URL, bypassing host construction
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ServiceSettings {
    /// Build the REST base URL, without a trailing slash
    pub fn base_url(&self) -> Result<String> {
        let url = match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => {
                let port = self.port.unwrap_or(443);
                let scheme = if port == 443 { "https" } else { "http" };
                format!(
                    "{scheme}://public-rest{}.bullhornstaffing.com:{port}/rest-services/{}",
                    self.swimlane, self.corp_token
                )
            }
        };
        Url::parse(&url)?;
        Ok(url)
    }
}

// ============================================================================
// Additional Criteria
// ============================================================================

/// Globally configured clause restricting every query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalCriteria {
    /// Field the clause compares against
    #[serde(default)]
    pub field: String,

    /// Accepted values, OR-joined
    #[serde(default)]
    pub values: Vec<String>,

    /// Default sort expression for job searches
    #[serde(default)]
    pub sort: Option<String>,
}

impl AdditionalCriteria {
    pub fn new(field: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            field: field.into(),
            values,
            sort: None,
        }
    }

    /// Set the default sort
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Whether the clause should be injected at all
    ///
    /// Unset fields, empty value lists and the template placeholders all
    /// disable injection.
    pub fn is_active(&self) -> bool {
        !self.field.is_empty()
            && self.field != FIELD_PLACEHOLDER
            && self
                .values
                .first()
                .is_some_and(|first| first != VALUE_PLACEHOLDER)
    }
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// HTTP transport tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Maximum number of transport-level retries
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Requests per second; 0 disables rate limiting
    #[serde(default = "default_rps")]
    pub requests_per_second: u32,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            requests_per_second: default_rps(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_rps() -> u32 {
    10
}

// ============================================================================
// Loading
// ============================================================================

/// Load settings from a JSON or YAML file, chosen by extension
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read settings file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    let settings = if is_yaml {
        load_settings_from_yaml(&content)?
    } else {
        load_settings_from_json(&content)?
    };
    Ok(settings)
}

/// Parse and validate settings from a JSON string
pub fn load_settings_from_json(json: &str) -> Result<Settings> {
    let settings: Settings = serde_json::from_str(json)?;
    settings.validate()?;
    Ok(settings)
}

/// Parse and validate settings from a YAML string
pub fn load_settings_from_yaml(yaml: &str) -> Result<Settings> {
    let settings: Settings = serde_yaml::from_str(yaml)?;
    settings.validate()?;
    Ok(settings)
}

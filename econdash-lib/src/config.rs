//! Client configuration.

use std::time::Duration;

use crate::error::ConfigError;

/// Backend URL used when `ECONDASH_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api/analytics/";

/// Delay between the last keystroke and the search request.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

const BASE_URL_VAR: &str = "ECONDASH_BASE_URL";
const TIMEOUT_VAR: &str = "ECONDASH_TIMEOUT_SECS";
const DEBOUNCE_VAR: &str = "ECONDASH_SEARCH_DEBOUNCE_MS";

/// Settings for [`DashboardClient`](crate::DashboardClient) and
/// [`CountrySearch`](crate::search::CountrySearch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Root of the analytics API; endpoint paths are joined onto it.
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub search_debounce: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }
}

impl DashboardConfig {
    /// Load from the process environment, falling back to defaults.
    ///
    /// - `ECONDASH_BASE_URL`
    /// - `ECONDASH_TIMEOUT_SECS` (positive integer)
    /// - `ECONDASH_SEARCH_DEBOUNCE_MS` (integer)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_VAR) {
            url::Url::parse(&url).map_err(|e| ConfigError::invalid(BASE_URL_VAR, &url, e))?;
            config.base_url = url;
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(TIMEOUT_VAR, &raw, e))?;
            if secs == 0 {
                return Err(ConfigError::invalid(TIMEOUT_VAR, raw, "must be positive"));
            }
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(raw) = lookup(DEBOUNCE_VAR) {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(DEBOUNCE_VAR, &raw, e))?;
            config.search_debounce = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

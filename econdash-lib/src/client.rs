//! Main DashboardClient

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::DashboardConfig;
use crate::error::{ApiError, Error};
use crate::model::{
    ApiErrorBody, CorrelationAnalysis, CountryDetail, CountrySummary, Governorate, InflationFilter,
    InflationTrend, LaborMarketTrends, MapPoint, RealEstateTrends, Validate,
};

/// Client for the analytics JSON endpoints.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely. Every payload is validated before it is returned.
///
/// # Example
///
/// ```ignore
/// use econdash_lib::DashboardClient;
///
/// let client = DashboardClient::builder()
///     .base_url("http://127.0.0.1:8000/api/analytics/")
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let hits = client.search_countries("tun").await?;
/// ```
#[derive(Clone)]
pub struct DashboardClient {
    inner: Arc<DashboardClientInner>,
}

struct DashboardClientInner {
    base_url: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl DashboardClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> DashboardClientBuilder<Missing> {
        DashboardClientBuilder::new()
    }

    /// Builds a client from loaded configuration.
    pub fn from_config(config: &DashboardConfig) -> Result<Self, Error> {
        let mut builder = Self::builder().base_url(config.base_url.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    /// Returns the base URL endpoint paths are joined onto.
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    /// Map markers for every country with a happiness score in the latest year.
    pub async fn global_dashboard_data(&self) -> Result<Vec<MapPoint>, Error> {
        self.get_json("global-dashboard-data/", &[]).await
    }

    /// Countries matching `query` by name substring or exact code.
    ///
    /// A blank query returns no results without a request.
    pub async fn search_countries(&self, query: &str) -> Result<Vec<CountrySummary>, Error> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.get_json("search-countries/", &[("q", query.to_string())])
            .await
    }

    /// Country info and yearly indicators.
    pub async fn country_detail(&self, country_name: &str) -> Result<CountryDetail, Error> {
        let path = format!("country-detail/{}/", urlencoding::encode(country_name));
        self.get_json(&path, &[]).await
    }

    /// Average inflation by year for the filtered countries.
    pub async fn inflation_trends(
        &self,
        filter: &InflationFilter,
    ) -> Result<Vec<InflationTrend>, Error> {
        filter.validate()?;
        self.get_json("inflation-trends/", &filter.query_pairs())
            .await
    }

    /// Real estate price series for a governorate.
    pub async fn real_estate_trends(&self, governorate_id: u32) -> Result<RealEstateTrends, Error> {
        let path = format!("real-estate-trends/{}/", governorate_id);
        self.get_json(&path, &[]).await
    }

    /// Labor market series for a governorate.
    pub async fn labor_market_trends(
        &self,
        governorate_id: u32,
    ) -> Result<LaborMarketTrends, Error> {
        let path = format!("labor-market-trends/{}/", governorate_id);
        self.get_json(&path, &[]).await
    }

    /// Static correlation matrix and PCA loadings.
    pub async fn correlation_analysis(&self) -> Result<CorrelationAnalysis, Error> {
        self.get_json("correlation-analysis/", &[]).await
    }

    /// Tunisian governorates, from the router mounted beside the analytics API.
    pub async fn governorates(&self) -> Result<Vec<Governorate>, Error> {
        self.get_json("../governorates/", &[]).await
    }

    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut url = self
            .inner
            .base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, Error>
    where
        T: DeserializeOwned + Validate,
    {
        let url = self.endpoint(path, query)?;
        debug!("GET {}", url);

        let mut request = self.inner.http_client.get(url.clone());
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::from)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            warn!("GET {} failed with {}: {}", url, status, message);
            return Err(ApiError::http(status.as_u16(), message).into());
        }

        let payload: T = match serde_json::from_str(&body) {
            Ok(payload) => payload,
            Err(e) => return Err(ApiError::parse_with_body(e.to_string(), body).into()),
        };
        payload.validate()?;
        Ok(payload)
    }

    fn map_send_error(&self, error: reqwest::Error) -> ApiError {
        match self.inner.timeout {
            Some(timeout) if error.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::Network(error),
        }
    }
}

impl std::fmt::Debug for DashboardClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`DashboardClient`].
///
/// Uses the typestate pattern so `build` is only callable once the base URL
/// has been set.
pub struct DashboardClientBuilder<BaseUrl> {
    base_url: BaseUrl,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl DashboardClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the API root, e.g. `http://127.0.0.1:8000/api/analytics/`.
    ///
    /// A trailing `/` is added if missing so endpoint paths join beneath it.
    pub fn base_url(self, url: impl Into<String>) -> DashboardClientBuilder<Set<String>> {
        DashboardClientBuilder {
            base_url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for DashboardClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> DashboardClientBuilder<U> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl DashboardClientBuilder<Set<String>> {
    /// Builds the [`DashboardClient`].
    pub fn build(self) -> Result<DashboardClient, Error> {
        let mut raw = self.base_url.0;
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url =
            Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", raw, e)))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::from)?
            }
        };

        Ok(DashboardClient {
            inner: Arc::new(DashboardClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

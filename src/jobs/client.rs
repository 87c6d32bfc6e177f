use axum::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::config::AdzunaConfig;
use crate::jobs::dto::{
    AdzunaCategoriesResponse, AdzunaSearchResponse, AdzunaTopCompaniesResponse, JobSearch,
    SearchQuery,
};

/// Failures talking to the upstream job provider. The search endpoint
/// collapses these into fallback data; categories and top-companies
/// surface them to the caller.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Upstream provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream provider returned status {0}")]
    Status(StatusCode),

    #[error("Upstream provider credentials are not configured")]
    MissingCredentials,
}

/// Seam to the upstream job-search provider. Injected into `AppState` so
/// tests can substitute fakes.
#[async_trait]
pub trait JobsClient: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<JobSearch, UpstreamError>;
    async fn categories(&self, country: &str) -> Result<Vec<serde_json::Value>, UpstreamError>;
    async fn top_companies(&self, country: &str)
        -> Result<Vec<serde_json::Value>, UpstreamError>;
}

#[derive(Clone)]
pub struct AdzunaClient {
    http: reqwest::Client,
    config: AdzunaConfig,
}

impl AdzunaClient {
    /// One timeout on the shared client bounds every upstream call.
    pub fn new(config: AdzunaConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    fn credentials(&self) -> Result<(&str, &str), UpstreamError> {
        match (&self.config.app_id, &self.config.app_key) {
            (Some(id), Some(key)) => Ok((id, key)),
            _ => Err(UpstreamError::MissingCredentials),
        }
    }
}

#[async_trait]
impl JobsClient for AdzunaClient {
    async fn search(&self, query: &SearchQuery) -> Result<JobSearch, UpstreamError> {
        let (app_id, app_key) = self.credentials()?;
        let url = format!(
            "{}/{}/search/{}",
            self.config.base_url, query.country, query.page
        );

        let mut params: Vec<(&str, String)> = vec![
            ("app_id", app_id.to_string()),
            ("app_key", app_key.to_string()),
            ("results_per_page", query.results_per_page.to_string()),
        ];
        if let Some(what) = &query.what {
            params.push(("what", what.clone()));
        }
        if let Some(location) = &query.location {
            params.push(("where", location.clone()));
        }
        if let Some(category) = &query.category {
            params.push(("category", category.clone()));
        }

        let response = self.http.get(&url).query(&params).send().await?;
        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        let payload: AdzunaSearchResponse = response.json().await?;
        debug!(count = payload.count, "upstream search ok");
        Ok(JobSearch {
            count: payload.count,
            jobs: payload.results.into_iter().map(Into::into).collect(),
        })
    }

    async fn categories(&self, country: &str) -> Result<Vec<serde_json::Value>, UpstreamError> {
        let (app_id, app_key) = self.credentials()?;
        let url = format!("{}/{}/categories", self.config.base_url, country);

        let response = self
            .http
            .get(&url)
            .query(&[("app_id", app_id), ("app_key", app_key)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        let payload: AdzunaCategoriesResponse = response.json().await?;
        Ok(payload.results)
    }

    async fn top_companies(
        &self,
        country: &str,
    ) -> Result<Vec<serde_json::Value>, UpstreamError> {
        let (app_id, app_key) = self.credentials()?;
        let url = format!("{}/{}/top_companies", self.config.base_url, country);

        let response = self
            .http
            .get(&url)
            .query(&[("app_id", app_id), ("app_key", app_key)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        let payload: AdzunaTopCompaniesResponse = response.json().await?;
        Ok(payload.leaderboard)
    }
}

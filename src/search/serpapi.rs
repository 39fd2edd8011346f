//! SerpAPI Google search client.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{SearchResponse, SearchResultRecord};

use super::{SearchProvider, SearchQuery};

/// Default SerpAPI search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://serpapi.com/search";

/// Per-request HTTP timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Provider message for a query with no hits; not a failure.
const NO_RESULTS_MESSAGE: &str = "hasn't returned any results";

/// SerpAPI client. The API key is held by value; there is no global session.
#[derive(Clone)]
pub struct SerpApiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for SerpApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpApiClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl SerpApiClient {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    /// Query-string parameters for `query`.
    fn query_pairs(&self, query: &SearchQuery) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("engine", "google".to_string()),
            ("api_key", self.api_key.clone()),
            ("q", query.q.clone()),
            ("num", query.params.num.to_string()),
        ];
        if let Some(hl) = &query.params.hl {
            pairs.push(("hl", hl.clone()));
        }
        if let Some(tbs) = &query.params.tbs {
            pairs.push(("tbs", tbs.clone()));
        }
        pairs
    }
}

/// Converts a decoded response into results, mapping provider errors.
fn into_results(response: SearchResponse) -> Result<Vec<SearchResultRecord>, AppError> {
    match response.error {
        Some(message) if response.organic_results.is_empty() => {
            if message.contains(NO_RESULTS_MESSAGE) {
                Ok(Vec::new())
            } else {
                Err(AppError::SearchProvider(message))
            }
        }
        _ => Ok(response.organic_results),
    }
}

#[async_trait]
impl SearchProvider for SerpApiClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResultRecord>, AppError> {
        tracing::debug!(q = %query.q, num = query.params.num, "SerpAPI search");

        let response = self
            .http
            .get(&self.endpoint)
            .query(&self.query_pairs(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::SearchStatus {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: SearchResponse = response.json().await?;
        into_results(decoded)
    }
}

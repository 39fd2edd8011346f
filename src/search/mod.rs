//! Search acquisition: the provider seam and query construction.
//!
//! The engine consumes already-fetched results; this module is how the CLI
//! fetches them. [`SearchProvider`] is the seam, [`SerpApiClient`] the live
//! implementation.

pub mod query;
pub mod serpapi;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::SearchResultRecord;

pub use query::{display_variations, QueryTemplate};
pub use serpapi::SerpApiClient;

/// Provider-side parameters of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Number of results to request.
    #[serde(default = "default_num")]
    pub num: u32,
    /// Interface language (e.g. "en").
    #[serde(default)]
    pub hl: Option<String>,
    /// Time restriction (e.g. "qdr:y8" for the last eight years).
    #[serde(default)]
    pub tbs: Option<String>,
}

fn default_num() -> u32 {
    10
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            num: default_num(),
            hl: None,
            tbs: None,
        }
    }
}

/// A fully rendered search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
    pub params: SearchParams,
}

/// Fetches ordered search results for a query.
///
/// Implementations return results in provider order with missing fields
/// already defaulted.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResultRecord>, AppError>;
}

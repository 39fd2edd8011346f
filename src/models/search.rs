//! Search result records as returned by the search provider.

use serde::{Deserialize, Serialize};

/// One candidate evidence item from a search provider.
///
/// Fields missing from the provider payload deserialize to the empty string,
/// so the engine never sees a partially populated record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultRecord {
    /// Result title.
    #[serde(default)]
    pub title: String,
    /// Short text excerpt shown under the title.
    #[serde(default)]
    pub snippet: String,
    /// Result URL.
    #[serde(default)]
    pub link: String,
}

impl SearchResultRecord {
    /// Creates a record from its three text fields.
    pub fn new(
        title: impl Into<String>,
        snippet: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            link: link.into(),
        }
    }

    /// Lowercased `title + " " + snippet`, the text every content rule runs against.
    pub fn text_blob(&self) -> String {
        format!("{} {}", self.title, self.snippet).to_lowercase()
    }
}

/// Raw provider response. Only the organic results are of interest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub organic_results: Vec<SearchResultRecord>,
    /// Provider-reported failure, present instead of results.
    #[serde(default)]
    pub error: Option<String>,
}

//! Classification outcome for one organization.

use serde::{Deserialize, Serialize};

/// Separator used when evidence URLs are rendered into a single field.
pub const SOURCE_SEPARATOR: &str = "; ";

/// Final decision for one organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// True when at least one result qualified as evidence.
    pub has_evidence: bool,
    /// Qualifying links, deduplicated, in first-seen order.
    pub source_urls: Vec<String>,
}

impl ClassificationResult {
    /// The definite "no evidence" outcome.
    pub fn negative() -> Self {
        Self::default()
    }

    /// Builds a result from already-deduplicated evidence URLs.
    pub fn from_sources(source_urls: Vec<String>) -> Self {
        Self {
            has_evidence: !source_urls.is_empty(),
            source_urls,
        }
    }

    /// Evidence URLs joined with [`SOURCE_SEPARATOR`]; empty when there is none.
    pub fn joined_sources(&self) -> String {
        self.source_urls.join(SOURCE_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_is_empty() {
        let result = ClassificationResult::negative();
        assert!(!result.has_evidence);
        assert!(result.source_urls.is_empty());
        assert_eq!(result.joined_sources(), "");
    }

    #[test]
    fn test_from_sources_sets_flag() {
        let result = ClassificationResult::from_sources(vec![
            "https://a.example".to_string(),
            "https://b.example".to_string(),
        ]);
        assert!(result.has_evidence);
        assert_eq!(
            result.joined_sources(),
            "https://a.example; https://b.example"
        );
    }
}

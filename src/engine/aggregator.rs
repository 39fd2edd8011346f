//! Per-organization aggregation of matching results into a final decision.

use crate::engine::filter::is_admissible;
use crate::engine::matcher::evaluate;
use crate::engine::variations::NameVariations;
use crate::models::{ClassificationResult, MatchCriteria, SearchResultRecord};

/// Classifies `name` against already-fetched search `results`.
///
/// Results are filtered, evaluated in provider order, and the links of those
/// that qualify are returned deduplicated in first-seen order. A qualifying
/// result without a link still counts, contributing an empty URL. This never
/// fails: an empty result list is a definite negative.
pub fn classify(
    name: &str,
    results: &[SearchResultRecord],
    criteria: &MatchCriteria,
) -> ClassificationResult {
    if results.is_empty() {
        return ClassificationResult::negative();
    }

    let variations = NameVariations::generate(name);
    let mut source_urls: Vec<String> = Vec::new();

    for result in results {
        if !is_admissible(result, criteria) || !evaluate(result, &variations, criteria) {
            continue;
        }
        if !source_urls.contains(&result.link) {
            source_urls.push(result.link.clone());
        }
    }

    tracing::debug!(
        name = %name,
        results = results.len(),
        evidence = source_urls.len(),
        "Classified organization"
    );
    ClassificationResult::from_sources(source_urls)
}

//! Evidence classification engine.
//!
//! Given an organization name, the search results fetched for it and a
//! [`MatchCriteria`], decides whether the results contain credible evidence
//! that the organization uses the technology the criteria describe.
//!
//! The engine is pure: no I/O, no shared state, no errors. Pipeline:
//!
//! 1. [`variations`]: expand the name into plausible textual forms
//! 2. [`filter`]: drop results on banned domains, job boards or banned content
//! 3. [`matcher`]: require name + subject keyword + context keyword
//! 4. [`aggregator`]: collect qualifying links into a [`ClassificationResult`]

pub mod aggregator;
pub mod filter;
pub mod matcher;
pub mod variations;

pub use aggregator::classify;
pub use filter::is_admissible;
pub use matcher::{evaluate, NameMatch, Verdict};
pub use variations::{NameVariation, NameVariations};

use crate::models::{ClassificationResult, MatchCriteria, SearchResultRecord};

/// A classifier bound to one criteria set.
///
/// Safe to share across tasks; every call is independent.
#[derive(Debug, Clone)]
pub struct EvidenceEngine {
    criteria: MatchCriteria,
}

impl EvidenceEngine {
    pub fn new(criteria: MatchCriteria) -> Self {
        Self { criteria }
    }

    /// See [`aggregator::classify`].
    pub fn classify(&self, name: &str, results: &[SearchResultRecord]) -> ClassificationResult {
        classify(name, results, &self.criteria)
    }
}

//! Check runs: search, classify and record a list of organizations.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::config::RunConfig;
use crate::engine::EvidenceEngine;
use crate::error::AppError;
use crate::models::{ClassificationResult, OrganizationRow, SearchResultRecord};
use crate::profiles::Profile;
use crate::repositories::{EvidenceRecord, EvidenceSink};
use crate::search::SearchProvider;

/// Timing applied around search calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// Pause between consecutive organizations.
    pub delay: Duration,
    /// Upper bound on a single search call.
    pub search_timeout: Duration,
}

impl From<&RunConfig> for Pacing {
    fn from(run: &RunConfig) -> Self {
        Self {
            delay: run.delay(),
            search_timeout: run.search_timeout(),
        }
    }
}

/// Row selection for a run. Zero means "no limit".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Only consider the first `limit` rows.
    pub limit: usize,
    /// Stop after this many rows were newly classified.
    pub max_new: usize,
    /// Skip rows that already have a decision for this profile.
    pub skip_existing: bool,
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Rows in the input list.
    pub total: usize,
    /// Rows for which a search was attempted.
    pub processed: usize,
    /// Rows whose decision was recorded.
    pub updated: usize,
    /// Rows skipped because a decision already existed.
    pub skipped: usize,
    /// Rows whose search failed; nothing was recorded for them.
    pub errors: usize,
}

/// Runs one profile's check over organizations.
pub struct CheckerService {
    search: Arc<dyn SearchProvider>,
    profile_name: String,
    profile: Profile,
    engine: EvidenceEngine,
    pacing: Pacing,
}

impl CheckerService {
    pub fn new(
        search: Arc<dyn SearchProvider>,
        profile_name: impl Into<String>,
        profile: Profile,
        pacing: Pacing,
    ) -> Self {
        let engine = EvidenceEngine::new(profile.criteria.clone());
        Self {
            search,
            profile_name: profile_name.into(),
            profile,
            engine,
            pacing,
        }
    }

    pub fn profile_name(&self) -> &str {
        &self.profile_name
    }

    /// Fetches results for `name`, bounded by the search timeout.
    ///
    /// A timeout yields no results rather than an error.
    async fn fetch(&self, name: &str) -> Result<Vec<SearchResultRecord>, AppError> {
        let query = self.profile.search_query(name);
        match tokio::time::timeout(self.pacing.search_timeout, self.search.search(&query)).await {
            Ok(results) => results,
            Err(_) => {
                tracing::warn!(
                    name = %name,
                    timeout_secs = self.pacing.search_timeout.as_secs(),
                    "Search timed out, treating as no evidence"
                );
                Ok(Vec::new())
            }
        }
    }

    /// Searches and classifies a single organization.
    pub async fn check(&self, name: &str) -> Result<ClassificationResult, AppError> {
        let results = self.fetch(name).await?;
        Ok(self.engine.classify(name, &results))
    }

    /// Checks `rows` in order, recording decisions into `sink`.
    ///
    /// Failed searches are logged and counted; the run continues and the
    /// failed row is left without a decision. The sink is flushed once at the end.
    pub async fn run<S: EvidenceSink>(
        &self,
        rows: &[OrganizationRow],
        sink: &mut S,
        options: CheckOptions,
    ) -> Result<RunSummary, AppError> {
        let mut summary = RunSummary {
            total: rows.len(),
            ..RunSummary::default()
        };

        let rows = if options.limit > 0 && rows.len() > options.limit {
            tracing::info!("Limiting to first {} rows", options.limit);
            &rows[..options.limit]
        } else {
            rows
        };

        let mut newly_processed = 0;
        for (index, org) in rows.iter().enumerate() {
            tracing::info!("[{}/{}] Row {}: {}", index + 1, rows.len(), org.row, org.name);

            if options.skip_existing && sink.contains(org.row, &self.profile_name) {
                tracing::info!("  Skipped: already has a value");
                summary.skipped += 1;
                continue;
            }

            if options.max_new > 0 && newly_processed >= options.max_new {
                tracing::info!("Reached max new rows ({}), stopping", options.max_new);
                break;
            }

            summary.processed += 1;
            match self.check(&org.name).await {
                Ok(result) => {
                    tracing::info!(
                        "  Result: {}",
                        if result.has_evidence { "TRUE" } else { "FALSE" }
                    );
                    if result.has_evidence {
                        tracing::info!("  Sources: {}", result.joined_sources());
                    }
                    sink.record(EvidenceRecord::new(org, &self.profile_name, &result));
                    summary.updated += 1;
                    newly_processed += 1;
                }
                Err(err) => {
                    tracing::warn!(name = %org.name, error = %err, "Search failed");
                    summary.errors += 1;
                }
            }

            if index + 1 < rows.len() && !self.pacing.delay.is_zero() {
                tokio::time::sleep(self.pacing.delay).await;
            }
        }

        sink.flush()?;

        tracing::info!(
            total = summary.total,
            processed = summary.processed,
            updated = summary.updated,
            skipped = summary.skipped,
            errors = summary.errors,
            "Run complete"
        );
        Ok(summary)
    }
}

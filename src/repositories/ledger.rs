//! JSON results ledger.
//!
//! Stores the latest decision per `(row, profile)`. Decisions are buffered in
//! memory and written in one batch by [`EvidenceSink::flush`]; the file is
//! replaced atomically so an interrupted run never leaves a truncated ledger.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{ClassificationResult, OrganizationRow};

/// One persisted decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    /// 1-based line of the organization in the input list.
    pub row: usize,
    pub name: String,
    pub profile: String,
    pub has_evidence: bool,
    /// Evidence URLs joined with `"; "`, for spreadsheet-style consumers.
    #[serde(default)]
    pub sources: String,
    #[serde(default)]
    pub source_urls: Vec<String>,
}

impl EvidenceRecord {
    pub fn new(org: &OrganizationRow, profile: &str, result: &ClassificationResult) -> Self {
        Self {
            row: org.row,
            name: org.name.clone(),
            profile: profile.to_string(),
            has_evidence: result.has_evidence,
            sources: result.joined_sources(),
            source_urls: result.source_urls.clone(),
        }
    }

    fn same_key(&self, other: &EvidenceRecord) -> bool {
        self.row == other.row && self.profile == other.profile
    }
}

/// Destination for classification decisions.
pub trait EvidenceSink {
    /// True if a decision for `row` under `profile` is already stored.
    fn contains(&self, row: usize, profile: &str) -> bool;

    /// Buffers a decision, replacing any previous one for the same key.
    fn record(&mut self, record: EvidenceRecord);

    /// Writes buffered decisions.
    fn flush(&mut self) -> Result<(), AppError>;
}

/// File-backed [`EvidenceSink`].
#[derive(Debug)]
pub struct EvidenceLedger {
    path: PathBuf,
    records: Vec<EvidenceRecord>,
    dirty: bool,
}

impl EvidenceLedger {
    /// Opens the ledger at `path`; a missing file is an empty ledger.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let records = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| AppError::io(&path, e))?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content).map_err(|e| AppError::json(&path, e))?
            }
        } else {
            Vec::new()
        };

        tracing::debug!(path = %path.display(), records = records.len(), "Loaded ledger");
        Ok(Self {
            path,
            records,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored records; sorted by row, then profile, once flushed.
    pub fn records(&self) -> &[EvidenceRecord] {
        &self.records
    }

    pub fn get(&self, row: usize, profile: &str) -> Option<&EvidenceRecord> {
        self.records
            .iter()
            .find(|r| r.row == row && r.profile == profile)
    }
}

impl EvidenceSink for EvidenceLedger {
    fn contains(&self, row: usize, profile: &str) -> bool {
        self.get(row, profile).is_some()
    }

    fn record(&mut self, record: EvidenceRecord) {
        match self.records.iter_mut().find(|r| r.same_key(&record)) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
        self.dirty = true;
    }

    fn flush(&mut self) -> Result<(), AppError> {
        if !self.dirty {
            return Ok(());
        }
        self.records
            .sort_by(|a, b| a.row.cmp(&b.row).then_with(|| a.profile.cmp(&b.profile)));

        let json = serde_json::to_string_pretty(&self.records)
            .map_err(|e| AppError::json(&self.path, e))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| AppError::io(dir, e))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| AppError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| AppError::io(&self.path, e.error))?;

        tracing::info!(
            path = %self.path.display(),
            records = self.records.len(),
            "Wrote ledger"
        );
        self.dirty = false;
        Ok(())
    }
}

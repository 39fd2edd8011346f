//! Organizations read from the input list.

use serde::{Deserialize, Serialize};

/// One organization to check, keyed by its 1-based line in the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRow {
    pub row: usize,
    pub name: String,
}

impl OrganizationRow {
    /// Parses an input listing: one name per line, blank lines skipped.
    ///
    /// Names are trimmed; the row number always refers to the original line,
    /// so skipped blanks do not shift the keys of later rows.
    pub fn parse_list(content: &str) -> Vec<Self> {
        content
            .lines()
            .enumerate()
            .filter_map(|(index, line)| {
                let name = line.trim();
                (!name.is_empty()).then(|| Self {
                    row: index + 1,
                    name: name.to_string(),
                })
            })
            .collect()
    }
}

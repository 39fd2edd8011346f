//! Denylist gate applied before any result is considered as evidence.

use crate::models::{MatchCriteria, SearchResultRecord};

/// Why a result was excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection<'a> {
    /// The link contains a banned domain.
    Domain(&'a str),
    /// The link contains a banned keyword (job boards, careers pages).
    LinkKeyword(&'a str),
    /// The title or snippet contains a banned word.
    Content(&'a str),
}

/// Returns the first denylist rule `result` violates, if any.
pub fn rejection<'a>(
    result: &SearchResultRecord,
    criteria: &'a MatchCriteria,
) -> Option<Rejection<'a>> {
    let link = result.link.to_lowercase();
    if let Some(domain) = criteria.banned_domains.first_in(&link) {
        return Some(Rejection::Domain(domain));
    }
    if let Some(keyword) = criteria.banned_keywords.first_in(&link) {
        return Some(Rejection::LinkKeyword(keyword));
    }
    criteria
        .banned_content_words
        .first_in(&result.text_blob())
        .map(Rejection::Content)
}

/// True if `result` passes every denylist in `criteria`.
pub fn is_admissible(result: &SearchResultRecord, criteria: &MatchCriteria) -> bool {
    match rejection(result, criteria) {
        Some(reason) => {
            tracing::debug!(link = %result.link, ?reason, "Result filtered out");
            false
        }
        None => true,
    }
}

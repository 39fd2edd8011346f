//! Per-result evidence decision.
//!
//! A result counts as evidence only when its title and snippet mention the
//! organization, a subject keyword and a context keyword. Name presence is
//! decided by ordered tiers, most specific first, so that short or generic
//! names cannot match on incidental word co-occurrence.

use crate::engine::variations::{NameVariation, NameVariations};
use crate::models::{MatchCriteria, SearchResultRecord};

/// Words that make a two-word name specific enough to match on its own.
pub const SIGNIFICANT_WORDS: &[&str] = &[
    "electric",
    "power",
    "energy",
    "cooperative",
    "utility",
    "association",
    "district",
    "service",
    "authority",
];

/// Longest original name, in words, for which two-word variations may match.
pub const SHORT_NAME_MAX_WORDS: usize = 3;

/// Tier that established name presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameMatch {
    /// A variation of three or more words occurs in the text.
    Specific,
    /// A significant two-word variation of a short name occurs in the text.
    ShortName,
}

/// Outcome of evaluating one result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Evidence(NameMatch),
    MissingName,
    MissingSubject(NameMatch),
    MissingContext(NameMatch),
}

impl Verdict {
    pub fn is_evidence(self) -> bool {
        matches!(self, Verdict::Evidence(_))
    }
}

type NameTier = fn(&NameVariations, &str) -> bool;

/// Name tiers in evaluation order; the first one that holds wins.
const NAME_TIERS: &[(NameMatch, NameTier)] = &[
    (NameMatch::Specific, specific_name_present),
    (NameMatch::ShortName, short_name_present),
];

fn specific_name_present(variations: &NameVariations, text: &str) -> bool {
    variations
        .with_min_word_count(3)
        .any(|variation| text.contains(variation.as_str()))
}

fn short_name_present(variations: &NameVariations, text: &str) -> bool {
    if variations.original_word_count() > SHORT_NAME_MAX_WORDS {
        return false;
    }
    // Every two-word candidate is examined; an unqualified one does not end the tier.
    variations
        .with_word_count(2)
        .filter(|variation| is_significant(variation))
        .any(|variation| text.contains(variation.as_str()))
}

fn is_significant(variation: &NameVariation) -> bool {
    variation.words().any(|word| SIGNIFICANT_WORDS.contains(&word))
}

/// Finds the tier under which the organization's name occurs in `text`.
///
/// `text` must already be lowercase.
pub fn match_name(variations: &NameVariations, text: &str) -> Option<NameMatch> {
    NAME_TIERS
        .iter()
        .find(|(_, present)| present(variations, text))
        .map(|(tier, _)| *tier)
}

/// Evaluates `result` and reports which criterion, if any, it failed.
///
/// Keywords are only checked once the name is present.
pub fn assess(
    result: &SearchResultRecord,
    variations: &NameVariations,
    criteria: &MatchCriteria,
) -> Verdict {
    let text = result.text_blob();

    let Some(tier) = match_name(variations, &text) else {
        return Verdict::MissingName;
    };
    if !criteria.subject_keywords.any_in(&text) {
        return Verdict::MissingSubject(tier);
    }
    if !criteria.context_keywords.any_in(&text) {
        return Verdict::MissingContext(tier);
    }
    Verdict::Evidence(tier)
}

/// True iff `result` counts as evidence.
pub fn evaluate(
    result: &SearchResultRecord,
    variations: &NameVariations,
    criteria: &MatchCriteria,
) -> bool {
    let verdict = assess(result, variations, criteria);
    tracing::debug!(link = %result.link, ?verdict, "Evaluated result");
    verdict.is_evidence()
}

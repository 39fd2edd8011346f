//! Match criteria: the per-use-case keyword and denylist sets.

use serde::{Deserialize, Serialize};

/// A case-insensitive set of substrings.
///
/// Entries are lowercased and deduplicated on construction, otherwise kept
/// verbatim: `" co "` only matches a separate word, and `""` matches any text.
/// Insertion order is kept so configuration dumps stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = Vec::new();
        for item in items {
            let keyword = item.as_ref().to_lowercase();
            if !keywords.contains(&keyword) {
                keywords.push(keyword);
            }
        }
        Self(keywords)
    }

    /// True if any keyword occurs in `haystack`, which must already be lowercase.
    pub fn any_in(&self, haystack: &str) -> bool {
        self.0.iter().any(|keyword| haystack.contains(keyword.as_str()))
    }

    /// First keyword occurring in `haystack`, if any.
    pub fn first_in(&self, haystack: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|keyword| haystack.contains(keyword.as_str()))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for KeywordSet {
    fn from(items: Vec<String>) -> Self {
        Self::new(items)
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.0
    }
}

/// Keyword and denylist configuration for one use case.
///
/// This is data, not code: the drone-inspection and AI-camera checks differ
/// only in the values held here (see [`crate::profiles`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCriteria {
    /// Terms naming the technology (e.g. "drone", "uav").
    #[serde(default)]
    pub subject_keywords: KeywordSet,
    /// Terms naming the domain of use (e.g. "transmission line").
    #[serde(default)]
    pub context_keywords: KeywordSet,
    /// Substrings that disqualify a result when found in its link.
    #[serde(default)]
    pub banned_domains: KeywordSet,
    /// Path or host keywords that disqualify a result when found in its link.
    #[serde(default)]
    pub banned_keywords: KeywordSet,
    /// Words that disqualify a result when found in its title or snippet.
    #[serde(default)]
    pub banned_content_words: KeywordSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_set_lowercases_and_dedups() {
        let set = KeywordSet::new(["Drone", "drone", "UAV", " Co "]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["drone", "uav", " co "]);
    }

    #[test]
    fn test_keyword_set_keeps_entries_verbatim() {
        let spaced = KeywordSet::new([" co "]);
        assert!(spaced.any_in("smith co electric"));
        assert!(!spaced.any_in("cooperative"));

        let blank = KeywordSet::new([""]);
        assert!(!blank.is_empty());
        assert_eq!(blank.first_in("anything"), Some(""));
    }

    #[test]
    fn test_keyword_set_matching() {
        let set = KeywordSet::new(["power line", "transmission"]);
        assert!(set.any_in("crews inspect the transmission corridor"));
        assert_eq!(set.first_in("new power line built"), Some("power line"));
        assert!(!set.any_in("nothing relevant"));
        assert!(!KeywordSet::default().any_in("anything"));
    }

    #[test]
    fn test_criteria_deserializes_with_defaults() {
        let criteria: MatchCriteria = serde_json::from_str(
            r#"{"subject_keywords": ["Drone"], "context_keywords": ["Power Line"]}"#,
        )
        .unwrap();
        assert!(criteria.subject_keywords.any_in("drone"));
        assert!(criteria.context_keywords.any_in("power line"));
        assert!(criteria.banned_domains.is_empty());
        assert!(criteria.banned_content_words.is_empty());
    }
}

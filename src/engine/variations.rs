//! Organization name variations.
//!
//! Real-world text rarely spells an organization's name the way a registry
//! does: "Flathead Electric Co-op", "Flathead Electric Cooperative" and
//! "Flathead Electric" all refer to the same entity. The generator expands a
//! canonical name into a small, deduplicated set of lowercase forms that the
//! matcher then looks for.
//!
//! Rewrites work on whitespace-separated tokens, never on raw substrings, so
//! a rule for `inc` cannot fire inside "lincoln".

/// `(expanded, abbreviated)` token pairs.
///
/// For every pair whose form appears in a name, the generator emits the
/// expanded rewrite and the abbreviated rewrite. Rules are applied one at a
/// time; no variation combines two rewrites.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("cooperative", "co-op"),
    ("cooperative", "coop"),
    ("association", "assn"),
    ("incorporated", "inc"),
    ("company", "co"),
    ("corporation", "corp"),
];

/// Generic corporate suffixes dropped when computing the leading "main words".
pub const CORPORATE_SUFFIXES: &[&str] = &[
    "inc",
    "incorporated",
    "assn",
    "association",
    "co-op",
    "coop",
    "cooperative",
    "co",
    "corp",
    "corporation",
];

/// A lowercase rendering of an organization name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVariation {
    text: String,
    word_count: usize,
}

impl NameVariation {
    fn new(text: String) -> Self {
        let word_count = text.split_whitespace().count();
        Self { text, word_count }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }
}

/// Deduplicated name variations in generation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVariations {
    original_word_count: usize,
    items: Vec<NameVariation>,
}

impl NameVariations {
    /// Generates the variation set for `name`.
    ///
    /// The first entry is always the trimmed, lowercased original.
    pub fn generate(name: &str) -> Self {
        let original = name.trim().to_lowercase();
        let words: Vec<&str> = original.split_whitespace().collect();

        let mut variations = Self {
            original_word_count: name.split_whitespace().count(),
            items: Vec::new(),
        };
        variations.push(original.clone());

        for &(expanded, abbreviated) in ABBREVIATIONS {
            if contains_token(&words, expanded) {
                variations.push_opt(rewrite(&words, expanded, abbreviated));
            }
            if contains_token(&words, abbreviated) {
                variations.push_opt(rewrite(&words, abbreviated, expanded));
            }
        }

        variations.push(original.replace(['.', ','], ""));

        let main_words: Vec<&str> = words
            .iter()
            .filter(|word| !CORPORATE_SUFFIXES.contains(&bare(word)))
            .map(|word| word.trim_end_matches(','))
            .collect();
        if main_words.len() >= 2 {
            variations.push(main_words[..2].join(" "));
        }
        if main_words.len() >= 3 {
            variations.push(main_words[..3].join(" "));
        }

        tracing::trace!(
            name = %name,
            variations = ?variations.iter().map(NameVariation::as_str).collect::<Vec<_>>(),
            "Generated name variations"
        );
        variations
    }

    /// Word count of the name as supplied by the caller.
    pub fn original_word_count(&self) -> usize {
        self.original_word_count
    }

    pub fn iter(&self) -> impl Iterator<Item = &NameVariation> {
        self.items.iter()
    }

    /// Variations with exactly `count` words.
    pub fn with_word_count(&self, count: usize) -> impl Iterator<Item = &NameVariation> {
        self.items.iter().filter(move |v| v.word_count == count)
    }

    /// Variations with at least `count` words.
    pub fn with_min_word_count(&self, count: usize) -> impl Iterator<Item = &NameVariation> {
        self.items.iter().filter(move |v| v.word_count >= count)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.items.iter().any(|v| v.text == text)
    }

    fn push(&mut self, text: String) {
        if !text.is_empty() && !self.contains(&text) {
            self.items.push(NameVariation::new(text));
        }
    }

    fn push_opt(&mut self, text: Option<String>) {
        if let Some(text) = text {
            self.push(text);
        }
    }
}

/// Token with trailing `.`/`,` removed, so "inc." and "inc," compare as "inc".
fn bare(token: &str) -> &str {
    token.trim_end_matches(['.', ','])
}

fn contains_token(words: &[&str], token: &str) -> bool {
    words.iter().any(|word| bare(word) == token)
}

/// Replaces every `from` token with `to`, keeping the token's trailing
/// punctuation ("co-op," -> "cooperative,"); `None` when nothing matched.
fn rewrite(words: &[&str], from: &str, to: &str) -> Option<String> {
    if !contains_token(words, from) {
        return None;
    }
    let rewritten: Vec<String> = words
        .iter()
        .map(|word| {
            let stem = bare(word);
            if stem == from {
                format!("{to}{}", &word[stem.len()..])
            } else {
                word.to_string()
            }
        })
        .collect();
    Some(rewritten.join(" "))
}

//! Query construction for the search provider.

use serde::{Deserialize, Serialize};

/// Original-case abbreviation rewrites used when listing name alternatives
/// in a query.
const DISPLAY_ABBREVIATIONS: &[(&str, &[&str])] = &[
    ("Cooperative", &["Coop", "Co-op"]),
    ("Company", &["Co", "Co."]),
    ("Corporation", &["Corp", "Corp."]),
];

/// How a profile turns an organization name into a query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum QueryTemplate {
    /// `"<name>" <terms>`; `terms` is provider syntax appended verbatim.
    QuotedName { terms: String },
    /// `("<v1>" OR "<v2>" ...) AND ("<t1>" OR "<t2>" ...)` over the display
    /// variations of the name.
    AnyVariation { terms: Vec<String> },
}

impl QueryTemplate {
    pub fn render(&self, name: &str) -> String {
        match self {
            QueryTemplate::QuotedName { terms } => {
                format!("\"{}\" {}", name.trim(), terms.trim())
                    .trim_end()
                    .to_string()
            }
            QueryTemplate::AnyVariation { terms } => {
                let names = any_of(display_variations(name).iter().map(String::as_str));
                if terms.is_empty() {
                    names
                } else {
                    format!("{} AND {}", names, any_of(terms.iter().map(String::as_str)))
                }
            }
        }
    }
}

fn any_of<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let quoted: Vec<String> = items.map(|item| format!("\"{}\"", item)).collect();
    format!("({})", quoted.join(" OR "))
}

/// Name alternatives as written in queries, keeping the original casing.
///
/// "Flathead Electric Cooperative" yields the name itself plus
/// "Flathead Electric Coop" and "Flathead Electric Co-op".
pub fn display_variations(name: &str) -> Vec<String> {
    let name = name.trim();
    let words: Vec<&str> = name.split_whitespace().collect();
    let mut variations = vec![name.to_string()];

    for &(long, shorts) in DISPLAY_ABBREVIATIONS {
        if !words.contains(&long) {
            continue;
        }
        for short in shorts {
            let rewritten = words
                .iter()
                .map(|word| if *word == long { *short } else { *word })
                .collect::<Vec<_>>()
                .join(" ");
            if !variations.contains(&rewritten) {
                variations.push(rewritten);
            }
        }
    }

    variations
}

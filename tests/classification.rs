//! End-to-end classification behavior through the public engine API.

use techprobe::engine::{classify, EvidenceEngine};
use techprobe::models::{ClassificationResult, KeywordSet, MatchCriteria, SearchResultRecord};
use techprobe::profiles::Profile;

fn drone_criteria() -> MatchCriteria {
    MatchCriteria {
        subject_keywords: KeywordSet::new(["drone"]),
        context_keywords: KeywordSet::new(["transmission line", "inspection"]),
        banned_domains: KeywordSet::new(["ziprecruiter", "facebook"]),
        banned_keywords: KeywordSet::new(["indeed.com/jobs", "careers"]),
        banned_content_words: KeywordSet::default(),
    }
}

fn flathead_news(link: &str) -> SearchResultRecord {
    SearchResultRecord::new(
        "Flathead Electric Cooperative begins drone inspections",
        "drone inspection of transmission line",
        link,
    )
}

#[test]
fn scenario_full_name_with_subject_and_context() {
    let criteria = MatchCriteria {
        subject_keywords: KeywordSet::new(["drone"]),
        context_keywords: KeywordSet::new(["transmission line"]),
        ..MatchCriteria::default()
    };
    let outcome = classify(
        "Flathead Electric Cooperative",
        &[flathead_news("https://example.com/news1")],
        &criteria,
    );
    assert_eq!(
        outcome,
        ClassificationResult {
            has_evidence: true,
            source_urls: vec!["https://example.com/news1".to_string()],
        }
    );
}

#[test]
fn scenario_subject_without_context() {
    let criteria = MatchCriteria {
        subject_keywords: KeywordSet::new(["drone"]),
        context_keywords: KeywordSet::new(["transmission line"]),
        ..MatchCriteria::default()
    };
    let results = [SearchResultRecord::new(
        "Flathead Electric Cooperative drone show",
        "A drone light show at the annual meeting",
        "https://example.com/news2",
    )];
    assert_eq!(
        classify("Flathead Electric Cooperative", &results, &criteria),
        ClassificationResult::negative()
    );
}

#[test]
fn scenario_short_name_with_significant_word() {
    let results = [SearchResultRecord::new(
        "SECO Energy adds drone program",
        "Crews use a drone for inspection of remote lines",
        "https://example.com/seco",
    )];
    let outcome = classify("SECO Energy", &results, &drone_criteria());
    assert!(outcome.has_evidence);
    assert_eq!(outcome.source_urls, vec!["https://example.com/seco".to_string()]);
}

#[test]
fn scenario_job_board_link_is_excluded() {
    let results = [flathead_news("https://www.indeed.com/jobs?q=drone+pilot")];
    assert_eq!(
        classify("Flathead Electric Cooperative", &results, &drone_criteria()),
        ClassificationResult::negative()
    );
}

#[test]
fn scenario_duplicate_links_collapse() {
    let results = [
        flathead_news("https://example.com/news1"),
        SearchResultRecord::new(
            "Flathead Electric Cooperative drone update",
            "Transmission line inspection continues",
            "https://example.com/news1",
        ),
    ];
    let outcome = classify("Flathead Electric Cooperative", &results, &drone_criteria());
    assert_eq!(outcome.source_urls.len(), 1);
}

#[test]
fn empty_results_are_always_negative() {
    for name in ["SECO Energy", "Flathead Electric Cooperative", "X"] {
        assert_eq!(
            classify(name, &[], &drone_criteria()),
            ClassificationResult::negative()
        );
        assert_eq!(
            classify(name, &[], &Profile::ai_camera().criteria),
            ClassificationResult::negative()
        );
    }
}

#[test]
fn classification_is_deterministic() {
    let engine = EvidenceEngine::new(drone_criteria());
    let results = [
        flathead_news("https://example.com/b"),
        flathead_news("https://example.com/a"),
    ];
    let first = engine.classify("Flathead Electric Cooperative", &results);
    let second = engine.classify("Flathead Electric Cooperative", &results);
    assert_eq!(first, second);
    assert_eq!(
        first.source_urls,
        vec!["https://example.com/b".to_string(), "https://example.com/a".to_string()]
    );
}

#[test]
fn banned_results_never_change_the_outcome() {
    let name = "Flathead Electric Cooperative";
    let base = vec![
        flathead_news("https://example.com/news1"),
        SearchResultRecord::new("Unrelated", "text", "https://example.com/other"),
    ];
    let expected = classify(name, &base, &drone_criteria());

    let mut with_banned = base.clone();
    with_banned.insert(0, flathead_news("https://www.facebook.com/flathead/posts/1"));
    with_banned.push(flathead_news("https://flathead.example/careers/lineworker"));

    assert_eq!(classify(name, &with_banned, &drone_criteria()), expected);
}

#[test]
fn removing_an_admissible_result_never_adds_evidence() {
    let name = "Flathead Electric Cooperative";
    let results = vec![
        flathead_news("https://example.com/a"),
        SearchResultRecord::new("Unrelated", "text", "https://example.com/b"),
        flathead_news("https://example.com/c"),
    ];
    let full = classify(name, &results, &drone_criteria());

    for skip in 0..results.len() {
        let subset: Vec<_> = results
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != skip)
            .map(|(_, r)| r.clone())
            .collect();
        let partial = classify(name, &subset, &drone_criteria());
        assert!(partial.has_evidence <= full.has_evidence);
        assert!(partial
            .source_urls
            .iter()
            .all(|url| full.source_urls.contains(url)));
    }
}

#[test]
fn three_word_variation_matches_regardless_of_short_name_rules() {
    // Five-word name: the short-name tier is disabled, the specific tier still applies.
    let results = [SearchResultRecord::new(
        "Big Rivers Electric crews",
        "drone inspection along the transmission line",
        "https://example.com/big-rivers",
    )];
    let outcome = classify(
        "Big Rivers Electric Power Corporation",
        &results,
        &drone_criteria(),
    );
    assert!(outcome.has_evidence);
}

#[test]
fn generic_two_word_mentions_do_not_count() {
    let results = [SearchResultRecord::new(
        "Big Rivers region",
        "drone inspection of transmission line",
        "https://example.com/region",
    )];
    let outcome = classify(
        "Big Rivers Electric Power Corporation",
        &results,
        &drone_criteria(),
    );
    assert!(!outcome.has_evidence);
}

#[test]
fn drone_profile_end_to_end() {
    let response: techprobe::models::SearchResponse = serde_json::from_str(
        r#"{
            "organic_results": [
                {"title": "Careers at Flathead Electric Cooperative", "snippet": "Drone pilot, power line", "link": "https://flatheadelectric.example/careers"},
                {"title": "Flathead Electric Co-op takes to the sky", "snippet": "UAV inspections of distribution lines", "link": "https://dailyinterlake.example/uav"},
                {"title": "Flathead Electric Cooperative", "link": "https://flatheadelectric.example"}
            ]
        }"#,
    )
    .unwrap();

    let outcome = classify(
        "Flathead Electric Cooperative",
        &response.organic_results,
        &Profile::drone().criteria,
    );
    assert_eq!(
        outcome.source_urls,
        vec!["https://dailyinterlake.example/uav".to_string()]
    );
    assert_eq!(outcome.joined_sources(), "https://dailyinterlake.example/uav");
}

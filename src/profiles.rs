//! Use-case profiles.
//!
//! A profile bundles the match criteria, the query template and the search
//! parameters of one check. Two are built in:
//!
//! - `drone`: drones / UAS used for power line and utility inspection
//! - `ai-camera`: Pano AI and other AI-enabled cameras (wildfire detection)
//!
//! Configuration may override either or add new ones under `[profiles.<name>]`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{KeywordSet, MatchCriteria};
use crate::search::{QueryTemplate, SearchParams, SearchQuery};

pub const DRONE: &str = "drone";
pub const AI_CAMERA: &str = "ai-camera";

/// Everything one use case needs to search and classify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Short human-readable description.
    #[serde(default)]
    pub description: String,
    pub criteria: MatchCriteria,
    pub query: QueryTemplate,
    #[serde(default)]
    pub search: SearchParams,
}

impl Profile {
    /// Builds the provider request for `name`.
    pub fn search_query(&self, name: &str) -> SearchQuery {
        SearchQuery {
            q: self.query.render(name),
            params: self.search.clone(),
        }
    }

    /// Drone / UAS usage for power line and utility inspection.
    pub fn drone() -> Self {
        Self {
            description: "Drones or UAS used for power line and utility inspection".to_string(),
            criteria: MatchCriteria {
                subject_keywords: KeywordSet::new([
                    "uas",
                    "uav",
                    "drone",
                    "unmanned aerial vehicle",
                    "unmanned aerial",
                ]),
                context_keywords: KeywordSet::new([
                    "power line",
                    "transmission line",
                    "distribution line",
                    "utility inspection",
                    "line inspection",
                    "infrastructure inspection",
                    "electrical inspection",
                    "grid inspection",
                    "pole inspection",
                    "transmission",
                    "distribution",
                    "electrical grid",
                ]),
                banned_domains: KeywordSet::new(["ziprecruiter", "facebook"]),
                banned_keywords: KeywordSet::new([
                    "careers",
                    "career",
                    "recruiting",
                    "recruiter",
                    "recruitment",
                    "jobs",
                    "job-board",
                    "jobboard",
                    "hiring",
                    "indeed",
                    "monster",
                    "glassdoor",
                    "linkedin.com/jobs",
                    "simplyhired",
                    "dice.com",
                ]),
                banned_content_words: KeywordSet::default(),
            },
            query: QueryTemplate::QuotedName {
                terms: "(drone OR UAV OR UAS OR aerial OR drones) (inspect OR inspection)"
                    .to_string(),
            },
            search: SearchParams {
                num: 20,
                hl: Some("en".to_string()),
                tbs: None,
            },
        }
    }

    /// Pano AI and other AI-enabled cameras.
    pub fn ai_camera() -> Self {
        let camera_terms = [
            "pano ai",
            "panoai",
            "ai camera",
            "ai-enabled camera",
            "ai enabled camera",
            "ai-powered camera",
            "ai powered camera",
            "ai-powered cameras",
            "ai powered cameras",
        ];
        Self {
            description: "Pano AI or other AI-enabled cameras".to_string(),
            criteria: MatchCriteria {
                subject_keywords: KeywordSet::new(camera_terms),
                context_keywords: KeywordSet::new([
                    "wildfire",
                    "fire",
                    "smoke",
                    "detection",
                    "monitoring",
                    "utility",
                    "inspection",
                ]),
                banned_domains: KeywordSet::new([
                    "distributech.com",
                    "chartwellinc.com",
                    "lobbylinx.com",
                    "re-plus.com/see-whos-attending/",
                ]),
                banned_keywords: KeywordSet::default(),
                banned_content_words: KeywordSet::new(["panasonic"]),
            },
            query: QueryTemplate::AnyVariation {
                terms: camera_terms.iter().map(|t| t.to_string()).collect(),
            },
            search: SearchParams {
                num: 10,
                hl: None,
                tbs: Some("qdr:y8".to_string()),
            },
        }
    }

    /// The built-in profiles by name.
    pub fn builtin() -> BTreeMap<String, Profile> {
        BTreeMap::from([
            (DRONE.to_string(), Profile::drone()),
            (AI_CAMERA.to_string(), Profile::ai_camera()),
        ])
    }
}

/// Built-in profiles with configured overrides and additions layered on top.
pub fn resolve(overrides: &BTreeMap<String, Profile>) -> BTreeMap<String, Profile> {
    let mut profiles = Profile::builtin();
    profiles.extend(overrides.iter().map(|(name, p)| (name.clone(), p.clone())));
    profiles
}

/// Looks up `name` among the effective profiles.
pub fn find(overrides: &BTreeMap<String, Profile>, name: &str) -> Result<Profile, AppError> {
    resolve(overrides)
        .remove(name)
        .ok_or_else(|| AppError::UnknownProfile(name.to_string()))
}

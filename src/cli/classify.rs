//! Classify subcommand - offline classification of a saved search response.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::engine::EvidenceEngine;
use crate::models::{ClassificationResult, SearchResponse, SearchResultRecord};
use crate::profiles::{self, DRONE};

/// Classify one organization against a saved search response.
#[derive(Parser)]
pub struct ClassifyCommand {
    /// Profile whose criteria to apply.
    #[arg(short, long, default_value = DRONE)]
    pub profile: String,

    /// Organization name.
    #[arg(short, long)]
    pub name: String,

    /// JSON file: a provider response with `organic_results`, or a bare array of results.
    #[arg(short, long)]
    pub results: PathBuf,
}

/// Accepted layouts of a saved results file.
#[derive(Deserialize)]
#[serde(untagged)]
enum SavedResults {
    Records(Vec<SearchResultRecord>),
    Response(SearchResponse),
}

impl SavedResults {
    fn into_records(self) -> Vec<SearchResultRecord> {
        match self {
            SavedResults::Records(records) => records,
            SavedResults::Response(response) => response.organic_results,
        }
    }
}

#[derive(Serialize)]
struct ClassifyOutput<'a> {
    name: &'a str,
    profile: &'a str,
    #[serde(flatten)]
    result: ClassificationResult,
}

impl ClassifyCommand {
    /// Run the classify command.
    pub fn run(self) -> Result<()> {
        let config = Config::load()?;
        let profile = profiles::find(&config.profiles, &self.profile)?;

        let content = std::fs::read_to_string(&self.results)
            .wrap_err_with(|| format!("Failed to read {}", self.results.display()))?;
        let records = serde_json::from_str::<SavedResults>(&content)
            .wrap_err_with(|| format!("Could not parse {} as search results", self.results.display()))?
            .into_records();
        tracing::info!("Loaded {} results for {}", records.len(), self.name);

        let engine = EvidenceEngine::new(profile.criteria);
        let output = ClassifyOutput {
            name: &self.name,
            profile: &self.profile,
            result: engine.classify(&self.name, &records),
        };

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}

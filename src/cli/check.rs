//! Check subcommand - live run over an organization list.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;

use crate::config::Config;
use crate::context::Context;
use crate::models::OrganizationRow;
use crate::profiles::DRONE;
use crate::repositories::EvidenceLedger;
use crate::services::CheckOptions;

/// Search and classify every organization in an input list.
#[derive(Parser)]
pub struct CheckCommand {
    /// Profile to check (e.g. "drone", "ai-camera").
    #[arg(short, long, default_value = DRONE)]
    pub profile: String,

    /// Text file with one organization name per line.
    #[arg(short, long)]
    pub input: PathBuf,

    /// JSON ledger receiving the decisions.
    #[arg(short, long, default_value = "results.json")]
    pub output: PathBuf,

    /// Only consider the first N rows (0 = all).
    #[arg(long, default_value_t = 0)]
    pub limit: usize,

    /// Stop after N newly classified rows (0 = no limit).
    #[arg(long, default_value_t = 0)]
    pub max_new: usize,

    /// Skip rows that already have a decision for this profile.
    #[arg(long)]
    pub skip_existing: bool,
}

impl CheckCommand {
    /// Run the check command.
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;
        tracing::info!(
            "Configuration: profile={}, limit={}, max_new={}, skip_existing={}, delay={}s",
            self.profile,
            self.limit,
            self.max_new,
            self.skip_existing,
            config.run.delay_secs
        );

        let content = std::fs::read_to_string(&self.input)
            .wrap_err_with(|| format!("Failed to read {}", self.input.display()))?;
        let rows = OrganizationRow::parse_list(&content);
        tracing::info!("Found {} rows with names", rows.len());
        if rows.is_empty() {
            tracing::info!("No rows to process");
            return Ok(());
        }

        let context = Context::connect(config)?;
        let checker = context.checker(&self.profile)?;
        let mut ledger = EvidenceLedger::load(&self.output)?;

        let options = CheckOptions {
            limit: self.limit,
            max_new: self.max_new,
            skip_existing: self.skip_existing,
        };
        let summary = checker.run(&rows, &mut ledger, options).await?;
        tracing::info!(
            "Saved {} {} decisions to {}",
            summary.updated,
            checker.profile_name(),
            ledger.path().display()
        );

        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    }
}

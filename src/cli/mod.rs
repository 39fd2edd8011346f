//! CLI module for techprobe.
//!
//! Subcommands:
//! - `check`: Search and classify every organization in a list
//! - `classify`: Classify one organization against a saved search response
//! - `profiles`: Print the effective profiles

mod check;
mod classify;
mod profiles;

use clap::{Parser, Subcommand};

pub use check::CheckCommand;
pub use classify::ClassifyCommand;

/// techprobe - public evidence of technology use
#[derive(Parser)]
#[command(name = "techprobe")]
#[command(about = "Finds search evidence that organizations use a technology")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search and classify every organization in an input list
    Check(CheckCommand),

    /// Classify one organization against a saved search response
    Classify(ClassifyCommand),

    /// Print the effective profiles as JSON
    Profiles,
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::Check(cmd) => cmd.run().await,
            Command::Classify(cmd) => cmd.run(),
            Command::Profiles => profiles::run(),
        }
    }
}

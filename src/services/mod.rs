//! Orchestration services around the classification engine.

mod checker;

pub use checker::{CheckOptions, CheckerService, Pacing, RunSummary};

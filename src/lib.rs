//! techprobe - Search-Evidence Classifier
//!
//! Decides, for a named organization, whether public search results give
//! credible evidence that it uses a given technology, and returns the
//! supporting URLs. The decision logic lives in [`engine`]; the other modules
//! fetch results, pace the run and persist decisions around it.

pub mod cli;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod models;
pub mod profiles;
pub mod repositories;
pub mod search;
pub mod services;

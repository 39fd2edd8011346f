//! Application error types.
//!
//! The classification engine itself never fails; these cover the layers
//! around it (search provider, results ledger, configuration).

use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors for techprobe.
#[derive(Error, Debug)]
pub enum AppError {
    // Search provider errors
    #[error("Search request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Search provider returned HTTP {status}: {body}")]
    SearchStatus { status: u16, body: String },

    #[error("Search provider error: {0}")]
    SearchProvider(String),

    #[error("Search API key not configured. Set serpapi.api_key or SERPAPI_API_KEY.")]
    MissingApiKey,

    // Ledger errors
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // Profile errors
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

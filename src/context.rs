//! Application context holding the shared dependencies of a run.

use std::sync::Arc;

use crate::config::Config;
use crate::error::AppError;
use crate::profiles;
use crate::search::{SearchProvider, SerpApiClient};
use crate::services::{CheckerService, Pacing};

/// Root application context.
///
/// Owns the configuration and the search client; services are built from it.
#[derive(Clone)]
pub struct Context {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Search provider used by check runs.
    pub search: Arc<dyn SearchProvider>,
}

impl Context {
    /// Creates a new context with the given dependencies.
    pub fn new(config: Config, search: Arc<dyn SearchProvider>) -> Self {
        Self {
            config: Arc::new(config),
            search,
        }
    }

    /// Creates a context backed by the live SerpAPI client.
    pub fn connect(config: Config) -> Result<Self, AppError> {
        let api_key = config
            .serpapi
            .api_key
            .clone()
            .ok_or(AppError::MissingApiKey)?;
        let client = SerpApiClient::new(api_key, config.serpapi.endpoint.clone())?;
        Ok(Self::new(config, Arc::new(client)))
    }

    /// Builds the checker for `profile_name`.
    pub fn checker(&self, profile_name: &str) -> Result<CheckerService, AppError> {
        let profile = profiles::find(&self.config.profiles, profile_name)?;
        Ok(CheckerService::new(
            self.search.clone(),
            profile_name,
            profile,
            Pacing::from(&self.config.run),
        ))
    }
}

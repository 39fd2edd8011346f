//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/techprobe/config.toml` (XDG) or platform config dir
//! 2. Project config: `.techprobe.toml`
//! 3. Environment variables: `TECHPROBE_*`, nested keys split on `__`
//!    (e.g. `TECHPROBE_SERPAPI__API_KEY`, `TECHPROBE_RUN__DELAY_SECS`)
//!
//! Every field has a default, so running without any config file is valid.
//! `SERPAPI_API_KEY` is honored when no key is configured.
//!
//! # Example
//!
//! ```toml
//! [serpapi]
//! api_key = "..."
//!
//! [run]
//! delay_secs = 1.5
//! search_timeout_secs = 60
//!
//! [profiles.lidar]
//! description = "LiDAR surveys"
//! query = { style = "quoted_name", terms = "(lidar OR \"laser scanning\")" }
//! search = { num = 20, hl = "en" }
//!
//! [profiles.lidar.criteria]
//! subject_keywords = ["lidar", "laser scanning"]
//! context_keywords = ["vegetation management", "transmission"]
//! banned_keywords = ["careers", "jobs"]
//! ```

use std::collections::BTreeMap;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::profiles::Profile;
use crate::search::serpapi::DEFAULT_ENDPOINT;

/// Environment variable consulted when `serpapi.api_key` is not configured.
pub const API_KEY_ENV: &str = "SERPAPI_API_KEY";

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub serpapi: SerpApiConfig,
    #[serde(default)]
    pub run: RunConfig,
    /// Profile overrides and additions, keyed by profile name.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

/// Search provider credentials and endpoint.
#[derive(Clone, Serialize, Deserialize)]
pub struct SerpApiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl std::fmt::Debug for SerpApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpApiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for SerpApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
        }
    }
}

/// Pacing of a check run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Delay between consecutive searches, in seconds.
    #[serde(default = "default_delay_secs")]
    pub delay_secs: f64,
    /// Upper bound on one search call, in seconds. A timeout counts as no evidence.
    #[serde(default = "default_search_timeout_secs")]
    pub search_timeout_secs: u64,
}

fn default_delay_secs() -> f64 {
    1.0
}

fn default_search_timeout_secs() -> u64 {
    60
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            delay_secs: default_delay_secs(),
            search_timeout_secs: default_search_timeout_secs(),
        }
    }
}

impl RunConfig {
    /// Negative delays mean no delay. Values rejected by [`RunConfig::validate`]
    /// also map to zero.
    pub fn delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.delay_secs.max(0.0)).unwrap_or(Duration::ZERO)
    }

    /// Rejects delays that are not a representable number of seconds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.delay_secs.is_finite()
            || Duration::try_from_secs_f64(self.delay_secs.max(0.0)).is_err()
        {
            return Err(figment::Error::from(format!(
                "run.delay_secs must be a finite number of seconds, got {}",
                self.delay_secs
            ))
            .into());
        }
        Ok(())
    }

    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout_secs)
    }
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::user_config_path(), Path::new(".techprobe.toml"))
    }

    /// Load config from explicit user and project files plus the environment.
    pub fn load_from(user_config: &Path, project_config: &Path) -> Result<Self, ConfigError> {
        let mut config: Config = Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(project_config))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed("TECHPROBE_").split("__"))
            .extract()
            .map_err(ConfigError::from)?;
        config.run.validate()?;

        if config.serpapi.api_key.is_none() {
            config.serpapi.api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        }
        Ok(config)
    }

    /// User config path: ~/.config/techprobe/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("techprobe").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("techprobe").join("config.toml"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        for (key, _) in std::env::vars() {
            if key.starts_with("TECHPROBE_") || key == API_KEY_ENV {
                std::env::remove_var(key);
            }
        }
    }

    fn toml_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn test_defaults_without_files() {
        clear_env();
        let config =
            Config::load_from(Path::new("/nonexistent/user.toml"), Path::new("/nonexistent/p.toml"))
                .unwrap();
        assert_eq!(config.serpapi.api_key, None);
        assert_eq!(config.serpapi.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.run.search_timeout(), Duration::from_secs(60));
        assert_eq!(config.run.delay(), Duration::from_secs(1));
        assert!(config.profiles.is_empty());
    }

    #[test]
    #[serial]
    fn test_project_overrides_user() {
        clear_env();
        let user = toml_file("[serpapi]\napi_key = \"user-key\"\n[run]\ndelay_secs = 3.0\n");
        let project = toml_file("[run]\ndelay_secs = 0.5\n");
        let config = Config::load_from(user.path(), project.path()).unwrap();
        assert_eq!(config.serpapi.api_key.as_deref(), Some("user-key"));
        assert_eq!(config.run.delay_secs, 0.5);
    }

    #[test]
    #[serial]
    fn test_env_overrides_files() {
        clear_env();
        let project = toml_file("[run]\nsearch_timeout_secs = 10\n");
        std::env::set_var("TECHPROBE_RUN__SEARCH_TIMEOUT_SECS", "5");
        let config = Config::load_from(Path::new("/nonexistent/user.toml"), project.path()).unwrap();
        clear_env();
        assert_eq!(config.run.search_timeout_secs, 5);
    }

    #[test]
    #[serial]
    fn test_api_key_fallback_env() {
        clear_env();
        std::env::set_var(API_KEY_ENV, "fallback-key");
        let config =
            Config::load_from(Path::new("/nonexistent/user.toml"), Path::new("/nonexistent/p.toml"))
                .unwrap();
        clear_env();
        assert_eq!(config.serpapi.api_key.as_deref(), Some("fallback-key"));
        assert!(!format!("{:?}", config.serpapi).contains("fallback-key"));
    }

    #[test]
    #[serial]
    fn test_profile_from_toml() {
        clear_env();
        let project = toml_file(
            r#"
[profiles.lidar]
description = "LiDAR surveys"
query = { style = "quoted_name", terms = "lidar" }

[profiles.lidar.criteria]
subject_keywords = ["LiDAR"]
context_keywords = ["vegetation management"]
"#,
        );
        let config = Config::load_from(Path::new("/nonexistent/user.toml"), project.path()).unwrap();
        let lidar = &config.profiles["lidar"];
        assert!(lidar.criteria.subject_keywords.any_in("lidar"));
        assert_eq!(lidar.search.num, 10);
        assert_eq!(lidar.search_query("Acme Power").q, "\"Acme Power\" lidar");
    }

    #[test]
    #[serial]
    fn test_unbounded_delay_is_an_error() {
        clear_env();
        for delay in ["inf", "nan", "1e30"] {
            let project = toml_file(&format!("[run]\ndelay_secs = {delay}\n"));
            let err = Config::load_from(Path::new("/nonexistent/user.toml"), project.path())
                .unwrap_err();
            assert!(err.to_string().contains("delay_secs"), "{delay}: {err}");
        }
    }

    #[test]
    fn test_delay_never_panics() {
        let run = |delay_secs| RunConfig {
            delay_secs,
            ..RunConfig::default()
        };
        assert_eq!(run(f64::INFINITY).delay(), Duration::ZERO);
        assert_eq!(run(f64::NAN).delay(), Duration::ZERO);
        assert_eq!(run(-2.0).delay(), Duration::ZERO);
        assert_eq!(run(0.25).delay(), Duration::from_millis(250));
        assert!(run(-2.0).validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_invalid_value_is_an_error() {
        clear_env();
        let project = toml_file("[run]\nsearch_timeout_secs = \"soon\"\n");
        assert!(Config::load_from(Path::new("/nonexistent/user.toml"), project.path()).is_err());
    }
}

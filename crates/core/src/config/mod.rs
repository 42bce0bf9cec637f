//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (SOGC_*)
//! 2. TOML config file (if SOGC_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (SOGC_*)
/// 2. TOML config file (if SOGC_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Newline-delimited list of company names to check.
    ///
    /// Set via SOGC_INPUT_FILE environment variable.
    #[serde(default = "default_input_file")]
    pub input_file: PathBuf,

    /// Append-only CSV of newly found companies.
    ///
    /// Set via SOGC_OUTPUT_FILE environment variable.
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Names not resolved in the latest run, rewritten every run.
    ///
    /// Set via SOGC_NOT_FOUND_FILE environment variable.
    #[serde(default = "default_not_found_file")]
    pub not_found_file: PathBuf,

    /// JSON resolution cache.
    ///
    /// Set via SOGC_CACHE_FILE environment variable.
    #[serde(default = "default_cache_file")]
    pub cache_file: PathBuf,

    /// Append-only log file, written alongside the console.
    ///
    /// Set via SOGC_LOG_FILE environment variable.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Zefix firm search endpoint.
    ///
    /// Set via SOGC_REGISTRY_URL environment variable.
    #[serde(default = "default_registry_url")]
    pub registry_url: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via SOGC_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Minimum spacing between registry requests in milliseconds.
    ///
    /// Set via SOGC_REQUEST_DELAY_MS environment variable.
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,

    /// Language of the registry response.
    ///
    /// Set via SOGC_LANGUAGE_KEY environment variable.
    #[serde(default = "default_language_key")]
    pub language_key: String,

    /// Maximum candidates requested per search.
    ///
    /// Set via SOGC_MAX_ENTRIES environment variable.
    #[serde(default = "default_max_entries")]
    pub max_entries: u32,

    /// User-Agent string for registry requests.
    ///
    /// Set via SOGC_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Origin header for registry requests.
    ///
    /// Set via SOGC_ORIGIN environment variable.
    #[serde(default = "default_origin")]
    pub origin: String,
}

fn default_input_file() -> PathBuf {
    PathBuf::from("data").join("companies_to_be_checked.txt")
}

fn default_output_file() -> PathBuf {
    PathBuf::from("output").join("results.csv")
}

fn default_not_found_file() -> PathBuf {
    PathBuf::from("output").join("companies_not_found.txt")
}

fn default_cache_file() -> PathBuf {
    PathBuf::from("cache.json")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("app.log")
}

fn default_registry_url() -> String {
    "https://www.zefix.ch/ZefixREST/api/v1/firm/search.json".into()
}

fn default_timeout_ms() -> u64 {
    15_000
}

fn default_request_delay_ms() -> u64 {
    5_000
}

fn default_language_key() -> String {
    "en".into()
}

fn default_max_entries() -> u32 {
    50
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:144.0) Gecko/20100101 Firefox/144.0".into()
}

fn default_origin() -> String {
    "https://www.zefix.ch".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_file: default_input_file(),
            output_file: default_output_file(),
            not_found_file: default_not_found_file(),
            cache_file: default_cache_file(),
            log_file: default_log_file(),
            registry_url: default_registry_url(),
            timeout_ms: default_timeout_ms(),
            request_delay_ms: default_request_delay_ms(),
            language_key: default_language_key(),
            max_entries: default_max_entries(),
            user_agent: default_user_agent(),
            origin: default_origin(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Minimum spacing between registry requests.
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `SOGC_`
    /// 2. TOML file from `SOGC_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let config_file = std::env::var_os("SOGC_CONFIG_FILE").map(PathBuf::from);
        Self::load_from(config_file.as_deref())
    }

    /// Load configuration, reading the TOML layer from `config_file` if given.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(config_file)
            .extract()
            .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(
            Env::prefixed("SOGC_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        )
    }
}

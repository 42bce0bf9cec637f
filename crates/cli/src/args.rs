//! Command-line arguments.
//!
//! Flags override the layered configuration for a single invocation.

use std::path::PathBuf;

use clap::Parser;
use sogc_core::{AppConfig, ConfigError};

/// Resolve company names against the Zefix registry.
#[derive(Debug, Default, Parser)]
#[command(name = "sogc-check", version, about)]
pub struct Args {
    /// TOML configuration file.
    #[arg(long, env = "SOGC_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Newline-delimited list of company names.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Results CSV, appended to.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Not-found list, rewritten every run.
    #[arg(long)]
    pub not_found: Option<PathBuf>,

    /// JSON resolution cache.
    #[arg(long)]
    pub cache: Option<PathBuf>,

    /// Log file, appended to.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Minimum delay between registry requests in milliseconds.
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

impl Args {
    /// Load the layered configuration and apply command-line overrides.
    pub fn load_config(&self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig::load_from(self.config.as_deref())?;
        let config = self.apply(config);
        config.validate()?;
        Ok(config)
    }

    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(path) = &self.input {
            config.input_file = path.clone();
        }
        if let Some(path) = &self.output {
            config.output_file = path.clone();
        }
        if let Some(path) = &self.not_found {
            config.not_found_file = path.clone();
        }
        if let Some(path) = &self.cache {
            config.cache_file = path.clone();
        }
        if let Some(path) = &self.log_file {
            config.log_file = path.clone();
        }
        if let Some(delay_ms) = self.delay_ms {
            config.request_delay_ms = delay_ms;
        }
        config
    }
}

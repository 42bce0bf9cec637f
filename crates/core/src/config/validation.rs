//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;
use url::Url;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `request_delay_ms` exceeds 10 minutes
    /// - `max_entries` is 0 or exceeds 500
    /// - `registry_url` is not an http(s) URL
    /// - `user_agent` or `language_key` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.request_delay_ms > 600_000 {
            return Err(ConfigError::Invalid {
                field: "request_delay_ms".into(),
                reason: "must not exceed 10 minutes (600000ms)".into(),
            });
        }

        if self.max_entries == 0 || self.max_entries > 500 {
            return Err(ConfigError::Invalid { field: "max_entries".into(), reason: "must be between 1 and 500".into() });
        }

        match Url::parse(&self.registry_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::Invalid {
                    field: "registry_url".into(),
                    reason: format!("unsupported scheme: {}", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::Invalid { field: "registry_url".into(), reason: e.to_string() });
            }
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if self.language_key.is_empty() {
            return Err(ConfigError::Invalid { field: "language_key".into(), reason: "must not be empty".into() });
        }

        if self.request_delay_ms == 0 {
            tracing::warn!("request_delay_ms is 0; registry requests will not be spaced");
        }

        Ok(())
    }
}

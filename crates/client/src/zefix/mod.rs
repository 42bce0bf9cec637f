//! Zefix firm search client.
//!
//! Queries the Swiss central business name index for firms whose name
//! contains the search term.
//!
//! ### Protocol
//!
//! - **Endpoint**: `POST https://www.zefix.ch/ZefixREST/api/v1/firm/search.json`
//! - **Body**: `{"name", "languageKey", "maxEntries", "offset"}` as JSON.
//! - **Headers**: browser-like `User-Agent` and `Origin`, JSON `Accept`.
//! - **Responses**: 200 with a `list` of firms; 404 when nothing matches.
//! - **Failures**: one request per search, no retry. Through the
//!   [`Registry`] seam every failure becomes [`SearchOutcome::Unavailable`].

pub mod error;
pub mod request;
pub mod response;

pub use error::ZefixError;
pub use request::SearchRequest;
pub use response::ZefixApiResponse;

use async_trait::async_trait;
use reqwest::{StatusCode, header};
use serde_json::Value;
use sogc_core::{AppConfig, CompanyName, Registry, SearchOutcome, UnavailableReason};
use std::time::{Duration, Instant};

/// Zefix client configuration.
#[derive(Debug, Clone)]
pub struct ZefixConfig {
    /// Search endpoint URL.
    pub registry_url: String,
    /// Request timeout (default: 15s).
    pub timeout: Duration,
    /// User-agent string.
    pub user_agent: String,
    /// Origin header value.
    pub origin: String,
    /// Response language (default: en).
    pub language_key: String,
    /// Page size (default: 50).
    pub max_entries: u32,
}

/// Same defaults as [`AppConfig::default`].
impl Default for ZefixConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for ZefixConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            registry_url: config.registry_url.clone(),
            timeout: config.timeout(),
            user_agent: config.user_agent.clone(),
            origin: config.origin.clone(),
            language_key: config.language_key.clone(),
            max_entries: config.max_entries,
        }
    }
}

/// Zefix firm search client.
#[derive(Debug, Clone)]
pub struct ZefixClient {
    http: reqwest::Client,
    config: ZefixConfig,
}

impl ZefixClient {
    /// Create a new Zefix client with the given configuration.
    pub fn new(config: ZefixConfig) -> Result<Self, ZefixError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { http, config })
    }

    /// First-page search request for `name` using the configured language and page size.
    pub fn request_for(&self, name: &CompanyName) -> SearchRequest {
        SearchRequest::new(name.as_str(), self.config.language_key.as_str(), self.config.max_entries)
    }

    /// Execute a firm search, returning the raw candidate entries.
    pub async fn search_firms(&self, req: &SearchRequest) -> Result<Vec<Value>, ZefixError> {
        req.validate()?;

        let start = Instant::now();
        tracing::debug!("searching Zefix: name={}", req.name);

        let http_response = self
            .http
            .post(&self.config.registry_url)
            .header(header::ACCEPT, "application/json")
            .header(header::ORIGIN, &self.config.origin)
            .json(req)
            .send()
            .await?;

        let status = http_response.status();
        tracing::debug!("Zefix response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Err(ZefixError::NotFound);
        }

        if !status.is_success() {
            let body = http_response.text().await.unwrap_or_default();
            return Err(ZefixError::HttpError { status: status.as_u16(), body });
        }

        let bytes = http_response.bytes().await?;
        let api_response: ZefixApiResponse =
            serde_json::from_slice(&bytes).map_err(|e| ZefixError::Parse(e.to_string()))?;
        let candidates = api_response.into_candidates();

        tracing::debug!("search completed in {:?}, {} candidates", start.elapsed(), candidates.len());

        Ok(candidates)
    }
}

#[async_trait]
impl Registry for ZefixClient {
    async fn search(&self, name: &CompanyName) -> SearchOutcome {
        match self.search_firms(&self.request_for(name)).await {
            Ok(candidates) => SearchOutcome::Found(candidates),
            Err(ZefixError::NotFound) => {
                tracing::info!("Company not found via API (404): {}", name);
                SearchOutcome::Unavailable(UnavailableReason::NotFound)
            }
            Err(ZefixError::HttpError { status, body }) => {
                tracing::error!(
                    "API request failed with status code {} for company {}. Response: {}",
                    status,
                    name,
                    body
                );
                SearchOutcome::Unavailable(UnavailableReason::Status { status })
            }
            Err(e) => {
                tracing::error!(company = %name, "An error during the API request occurred: {}", e);
                SearchOutcome::Unavailable(e.into())
            }
        }
    }
}

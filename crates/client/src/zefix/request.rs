//! Zefix firm search request body and validation.

use serde::Serialize;

use crate::zefix::ZefixError;

/// Body of a `POST` to the Zefix firm search endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Firm name to search for.
    pub name: String,

    /// Response language (e.g. "en", "de").
    pub language_key: String,

    /// Page size.
    pub max_entries: u32,

    /// Page offset.
    pub offset: u32,
}

impl SearchRequest {
    /// Build a first-page request for `name`.
    pub fn new(name: impl Into<String>, language_key: impl Into<String>, max_entries: u32) -> Self {
        Self { name: name.into(), language_key: language_key.into(), max_entries, offset: 0 }
    }

    /// Validate the search request parameters.
    pub fn validate(&self) -> Result<(), ZefixError> {
        if self.name.trim().is_empty() {
            return Err(ZefixError::InvalidQuery("name cannot be empty".to_string()));
        }

        if self.max_entries == 0 {
            return Err(ZefixError::InvalidQuery("maxEntries must be at least 1".to_string()));
        }

        Ok(())
    }
}

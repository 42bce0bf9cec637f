//! Company names and resolved registry records.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Error;

/// A trimmed, non-empty company name.
///
/// Serves both as the cache key and as the registry query term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompanyName(String);

impl CompanyName {
    /// Parse a raw line into a company name, trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidName("company name cannot be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive, otherwise exact, comparison with a registry name.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0.to_lowercase() == candidate.to_lowercase()
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registry candidate that matched the query, before it is dated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedCompany {
    pub company_name: String,
    pub company_uid: String,
    pub company_cantonal_exerpt_link: String,
}

impl MatchedCompany {
    /// Stamp the match with the date of the search, producing a record.
    pub fn stamp(self, search_date: NaiveDate) -> CompanyRecord {
        CompanyRecord {
            company_name: self.company_name,
            company_uid: self.company_uid,
            company_cantonal_exerpt_link: self.company_cantonal_exerpt_link,
            search_date,
        }
    }
}

/// A resolved company as stored in the cache and the results file.
///
/// Field names are part of the on-disk formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub company_name: String,
    pub company_uid: String,
    pub company_cantonal_exerpt_link: String,
    /// UTC date of the search, serialized as `YYYY-MM-DD`.
    pub search_date: NaiveDate,
}

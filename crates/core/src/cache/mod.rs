//! Resolution cache: the durable memory of prior runs.
//!
//! Maps a company name to either the record found for it or an explicit
//! "confirmed absent" marker. A name that is not in the map has never been
//! looked up. The cache is loaded once at start, grows by one entry per
//! queried name and is written back as a whole at the end of a run.
//!
//! On disk it is a flat JSON object, record or `null` per name:
//!
//! ```json
//! {
//!     "Acme AG": { "company_name": "ACME AG", ... },
//!     "Ghost Corp": null
//! }
//! ```

pub mod store;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{CompanyName, CompanyRecord};

/// Three-way result of a cache lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLookup<'a> {
    /// Previously resolved to a record.
    Hit(&'a CompanyRecord),
    /// Previously looked up with no exact match.
    HitAbsent,
    /// Never looked up.
    Miss,
}

/// In-memory resolution cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolutionCache {
    entries: BTreeMap<String, Option<CompanyRecord>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, name: &CompanyName) -> CacheLookup<'_> {
        match self.entries.get(name.as_str()) {
            Some(Some(record)) => CacheLookup::Hit(record),
            Some(None) => CacheLookup::HitAbsent,
            None => CacheLookup::Miss,
        }
    }

    /// Record the outcome of a lookup; `None` marks the name confirmed absent.
    ///
    /// Existing entries are kept. Returns `false` if the name was already cached.
    pub fn record(&mut self, name: &CompanyName, record: Option<CompanyRecord>) -> bool {
        if self.entries.contains_key(name.as_str()) {
            tracing::debug!(company = %name, "cache entry already present, keeping it");
            return false;
        }
        self.entries.insert(name.as_str().to_string(), record);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries that resolved to a record.
    pub fn found_count(&self) -> usize {
        self.entries.values().filter(|v| v.is_some()).count()
    }

    /// Number of entries marked confirmed absent.
    pub fn absent_count(&self) -> usize {
        self.entries.values().filter(|v| v.is_none()).count()
    }
}

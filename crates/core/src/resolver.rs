//! Exact-name matching against registry search results.
//!
//! The registry returns every firm whose name contains the query, so the
//! resolver keeps only a candidate whose full name equals the query,
//! ignoring case. Candidates are scanned in registry order and the first
//! match wins.

use serde::Deserialize;
use serde_json::Value;

use crate::{CompanyName, MatchedCompany};

/// Fields the resolver needs from a registry candidate.
#[derive(Debug, Deserialize)]
struct Candidate {
    name: String,
    uid: String,
    #[serde(rename = "cantonalExcerptWeb")]
    cantonal_excerpt_web: String,
}

impl From<Candidate> for MatchedCompany {
    fn from(c: Candidate) -> Self {
        MatchedCompany {
            company_name: c.name,
            company_uid: c.uid,
            company_cantonal_exerpt_link: c.cantonal_excerpt_web,
        }
    }
}

/// Pick the candidate whose name equals `original` case-insensitively.
///
/// Malformed candidates are skipped with a warning and the scan continues.
pub fn resolve(candidates: &[Value], original: &CompanyName) -> Option<MatchedCompany> {
    for (index, raw) in candidates.iter().enumerate() {
        let candidate = match Candidate::deserialize(raw) {
            Ok(candidate) => candidate,
            Err(e) => {
                tracing::warn!(company = %original, index, "Error parsing company data: {}", e);
                continue;
            }
        };

        if original.matches(&candidate.name) {
            return Some(candidate.into());
        }
    }

    None
}

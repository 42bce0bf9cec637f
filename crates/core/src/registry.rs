//! The registry seam between the pipeline and the business-name search service.

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::CompanyName;

/// Why a registry search produced no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// The registry answered with its "not found" status.
    NotFound,
    /// The registry answered with another non-success status.
    Status { status: u16 },
    /// The request never completed (network error, timeout).
    Transport(String),
    /// The response body was not the expected JSON.
    Malformed(String),
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::NotFound => f.write_str("not found"),
            UnavailableReason::Status { status } => write!(f, "HTTP {}", status),
            UnavailableReason::Transport(msg) => write!(f, "transport error: {}", msg),
            UnavailableReason::Malformed(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

/// Result of a single registry search.
///
/// Candidates are kept as raw JSON so that the resolver can skip entries
/// it cannot decode without discarding the whole result set.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<Value>),
    Unavailable(UnavailableReason),
}

/// A business registry that can be searched by company name.
///
/// Implementations issue exactly one request per call and never fail:
/// every failure collapses into [`SearchOutcome::Unavailable`].
#[async_trait]
pub trait Registry: Send + Sync {
    async fn search(&self, name: &CompanyName) -> SearchOutcome;
}

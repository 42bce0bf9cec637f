//! Zefix API client error types.

use std::sync::Arc;

use sogc_core::UnavailableReason;

/// Errors from the Zefix firm search client.
#[derive(Debug, thiserror::Error)]
pub enum ZefixError {
    /// Invalid search request.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// No firm matched the search (HTTP 404).
    #[error("not found")]
    NotFound,

    /// Non-success HTTP response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16, body: String },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ZefixError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { ZefixError::Timeout } else { ZefixError::Network(Arc::new(err)) }
    }
}

impl From<ZefixError> for UnavailableReason {
    fn from(err: ZefixError) -> Self {
        match err {
            ZefixError::NotFound => UnavailableReason::NotFound,
            ZefixError::HttpError { status, .. } => UnavailableReason::Status { status },
            ZefixError::Parse(msg) => UnavailableReason::Malformed(msg),
            e @ (ZefixError::InvalidQuery(_) | ZefixError::Timeout | ZefixError::Network(_)) => {
                UnavailableReason::Transport(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ZefixError::HttpError { status: 500, body: "boom".to_string() };
        assert!(err.to_string().contains("500"));

        let err = ZefixError::InvalidQuery("test".to_string());
        assert!(err.to_string().contains("invalid query"));
    }

    #[test]
    fn test_into_unavailable_reason() {
        assert_eq!(UnavailableReason::from(ZefixError::NotFound), UnavailableReason::NotFound);
        assert_eq!(
            UnavailableReason::from(ZefixError::HttpError { status: 429, body: String::new() }),
            UnavailableReason::Status { status: 429 }
        );
        assert!(matches!(UnavailableReason::from(ZefixError::Parse("eof".into())), UnavailableReason::Malformed(_)));
        assert!(matches!(UnavailableReason::from(ZefixError::Timeout), UnavailableReason::Transport(_)));
    }
}

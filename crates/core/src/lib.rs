//! Core types and shared functionality for sogc.
//!
//! This crate provides:
//! - Company name and record types
//! - The JSON-backed resolution cache
//! - Match resolution and the sequential resolution pipeline
//! - Input and output file handling
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod company;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod registry;
pub mod resolver;
pub mod throttle;

#[cfg(test)]
pub(crate) mod test_support;

pub use cache::{CacheLookup, ResolutionCache};
pub use company::{CompanyName, CompanyRecord, MatchedCompany};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use pipeline::{Clock, Pipeline, RunOutcome, RunStats, SystemClock};
pub use registry::{Registry, SearchOutcome, UnavailableReason};
pub use throttle::{Pacer, RequestPacer};

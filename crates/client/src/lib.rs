//! Client code for sogc.
//!
//! This crate provides the Zefix firm search client that backs the
//! resolution pipeline's [`Registry`](sogc_core::Registry) seam.

pub mod zefix;

#[cfg(test)]
mod test_support;

pub use zefix::{SearchRequest, ZefixApiResponse, ZefixClient, ZefixConfig, ZefixError};

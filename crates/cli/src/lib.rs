//! Command-line front end for sogc.
//!
//! Wires configuration, logging, the Zefix client and the resolution
//! pipeline into a single run over the input file.

pub mod app;
pub mod args;
pub mod logging;

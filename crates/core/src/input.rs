//! Input file of company names to check.
//!
//! One name per line. Lines are trimmed, blank lines dropped, order kept.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::CompanyName;

/// Parse newline-delimited text into company names.
pub fn parse_names(text: &str) -> Vec<CompanyName> {
    text.lines().filter_map(|line| CompanyName::parse(line).ok()).collect()
}

/// Load the names to check from `path`.
///
/// A missing, unreadable or empty file yields an empty list.
pub fn load_names(path: &Path) -> Vec<CompanyName> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::error!("Input file '{}' not found.", path.display());
            return Vec::new();
        }
        Err(e) => {
            tracing::error!("An error occurred while reading '{}': {}", path.display(), e);
            return Vec::new();
        }
    };

    let names = parse_names(&text);
    if names.is_empty() {
        tracing::warn!("Input file '{}' is empty.", path.display());
        return names;
    }

    tracing::info!("Loaded {} companies from '{}'", names.len(), path.display());
    names
}

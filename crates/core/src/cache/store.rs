//! Loading and saving the cache file.
//!
//! Saves go through a temp file in the target directory followed by a
//! rename, so an interrupted save never leaves a truncated cache behind.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use super::ResolutionCache;
use crate::Error;

/// Indentation used for the cache file.
const INDENT: &[u8] = b"    ";

impl ResolutionCache {
    /// Read the cache file.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn read(path: &Path) -> Result<Option<Self>, Error> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::io(path, e)),
        };

        let cache = serde_json::from_str(&data).map_err(|e| Error::json(path, e))?;
        Ok(Some(cache))
    }

    /// Load the cache file, starting empty if it is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::read(path) {
            Ok(Some(cache)) => {
                tracing::info!(entries = cache.len(), "Cache loaded from '{}'", path.display());
                cache
            }
            Ok(None) => {
                tracing::info!("No cache file found at '{}'. Starting fresh.", path.display());
                Self::new()
            }
            Err(e) => {
                tracing::warn!("Could not load cache from '{}'. Starting with an empty cache. Error: {}", path.display(), e);
                Self::new()
            }
        }
    }

    /// Serialize the cache as 4-space indented JSON.
    pub fn to_json_pretty(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut ser)?;
        Ok(buf)
    }

    /// Replace the cache file with the in-memory state.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let json = self.to_json_pretty().map_err(|e| Error::json(path, e))?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
        tmp.write_all(&json).map_err(|e| Error::io(tmp.path(), e))?;
        tmp.as_file().sync_all().map_err(|e| Error::io(tmp.path(), e))?;
        tmp.persist(path).map_err(|e| Error::io(path, e.error))?;

        tracing::info!(entries = self.len(), "Cache saved to '{}'", path.display());
        Ok(())
    }
}

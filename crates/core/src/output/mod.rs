//! Run outputs: the cumulative results CSV and the not-found list.

pub mod not_found;
pub mod results;

use std::fs;
use std::path::Path;

use crate::Error;

pub use not_found::write_not_found;
pub use results::{HEADER, append_results, read_results};

/// Create the parent directory of `path` if it does not exist.
fn ensure_parent(path: &Path) -> Result<(), Error> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir).map_err(|e| Error::io(dir, e)),
        _ => Ok(()),
    }
}

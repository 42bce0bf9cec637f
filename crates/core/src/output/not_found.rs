//! Not-found list, rewritten in full every run.

use std::fs;
use std::path::Path;

use super::ensure_parent;
use crate::{CompanyName, Error};

/// Replace the not-found file with `names`, one per line.
pub fn write_not_found(path: &Path, names: &[CompanyName]) -> Result<(), Error> {
    ensure_parent(path)?;

    let mut content = names.iter().map(CompanyName::as_str).collect::<Vec<_>>().join("\n");
    content.push('\n');

    fs::write(path, content).map_err(|e| Error::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn names(raw: &[&str]) -> Vec<CompanyName> {
        raw.iter().map(|n| CompanyName::parse(n).unwrap()).collect()
    }

    #[test]
    fn test_writes_one_name_per_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output").join("companies_not_found.txt");

        write_not_found(&path, &names(&["Ghost Corp", "Phantom AG"])).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Ghost Corp\nPhantom AG\n");
    }

    #[test]
    fn test_overwrites_previous_run() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("companies_not_found.txt");

        write_not_found(&path, &names(&["Old Name AG", "Ghost Corp"])).unwrap();
        write_not_found(&path, &names(&["Ghost Corp"])).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains("Old Name AG"));
        assert_eq!(text, "Ghost Corp\n");
    }

    #[test]
    fn test_empty_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("companies_not_found.txt");

        write_not_found(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "\n");
    }
}

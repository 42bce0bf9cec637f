//! Append-only results CSV.
//!
//! ### Format
//!
//! - Header `search_date,company_name,company_uid,company_cantonal_exerpt_link`,
//!   written only when the file is created (or found empty).
//! - `company_name` is always quoted, with embedded quotes doubled.
//! - Other columns are quoted only when they contain a delimiter, a quote
//!   or a line break.
//! - Every row ends with `\n`.

use std::fs::{self, OpenOptions};
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};

use super::ensure_parent;
use crate::{CompanyRecord, Error};

/// Column names of the results file.
pub const HEADER: [&str; 4] = ["search_date", "company_name", "company_uid", "company_cantonal_exerpt_link"];

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn quote_if_needed(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) { quote(field) } else { field.to_string() }
}

/// Append `records` to the results file, writing the header on first use.
///
/// Does nothing when `records` is empty. Returns the number of rows written.
pub fn append_results(path: &Path, records: &[CompanyRecord]) -> Result<usize, Error> {
    if records.is_empty() {
        return Ok(0);
    }

    ensure_parent(path)?;

    let needs_header = fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    // Quoting is applied per column above, so the writer emits fields verbatim.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    if needs_header {
        writer.write_record(HEADER).map_err(|e| Error::csv(path, e))?;
    }

    for record in records {
        writer
            .write_record([
                record.search_date.format("%Y-%m-%d").to_string(),
                quote(&record.company_name),
                quote_if_needed(&record.company_uid),
                quote_if_needed(&record.company_cantonal_exerpt_link),
            ])
            .map_err(|e| Error::csv(path, e))?;
    }

    writer.flush().map_err(|e| Error::io(path, e))?;

    Ok(records.len())
}

/// Read every record from the results file.
pub fn read_results(path: &Path) -> Result<Vec<CompanyRecord>, Error> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| Error::csv(path, e))?;
    reader
        .deserialize()
        .map(|row| row.map_err(|e| Error::csv(path, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn record(name: &str, uid: &str) -> CompanyRecord {
        CompanyRecord {
            company_name: name.to_string(),
            company_uid: uid.to_string(),
            company_cantonal_exerpt_link: format!("https://example.ch/excerpt?uid={}", uid),
            search_date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
        }
    }

    #[test]
    fn test_first_write_has_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output").join("results.csv");

        let written = append_results(&path, &[record("Acme AG", "CHE1")]).unwrap();

        assert_eq!(written, 1);
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "search_date,company_name,company_uid,company_cantonal_exerpt_link\n\
             2024-02-29,\"Acme AG\",CHE1,https://example.ch/excerpt?uid=CHE1\n"
        );
    }

    #[test]
    fn test_header_written_once_across_runs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");

        append_results(&path, &[record("Acme AG", "CHE1")]).unwrap();
        append_results(&path, &[record("Beta GmbH", "CHE2"), record("Gamma SA", "CHE3")]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("search_date,company_name").count(), 1);
        assert_eq!(text.lines().count(), 4);
        assert!(!text.contains("\n\n"));
    }

    #[test]
    fn test_empty_records_leave_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");

        assert_eq!(append_results(&path, &[]).unwrap(), 0);
        assert!(!path.exists());

        fs::write(&path, "existing").unwrap();
        append_results(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing");
    }

    #[test]
    fn test_company_name_is_escaped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");

        append_results(&path, &[record("Foo \"Bar\", Baz AG", "CHE9")]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains(",\"Foo \"\"Bar\"\", Baz AG\",CHE9,"));
    }

    #[test]
    fn test_round_trip_preserves_tuples() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        let records = vec![
            record("Foo \"Bar\", Baz AG", "CHE9"),
            record("Plain AG", "CHE-1,2"),
            record("Müller & Söhne", "CHE3"),
        ];

        append_results(&path, &records[..1]).unwrap();
        append_results(&path, &records[1..]).unwrap();

        assert_eq!(read_results(&path).unwrap(), records);
    }

    #[test]
    fn test_header_added_to_empty_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("results.csv");
        fs::write(&path, "").unwrap();

        append_results(&path, &[record("Acme AG", "CHE1")]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("search_date,"));
    }
}

//! Console and log file output.
//!
//! Every event goes to stderr and is appended to the log file, one line
//! each, as `YYYY-MM-DD HH:MM:SS LEVEL message`. The level filter comes from
//! `RUST_LOG` and defaults to `info`.

use std::fmt;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;

/// UTC timestamp with second precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTimer;

impl FormatTime for LogTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Utc::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Install the global subscriber writing to stderr and `log_file`.
///
/// If the log file cannot be opened, logging continues on stderr only.
pub fn init(log_file: &Path) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console = tracing_subscriber::fmt::layer()
        .with_timer(LogTimer)
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, open_error) = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => {
            let layer = tracing_subscriber::fmt::layer()
                .with_timer(LogTimer)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            (Some(layer), None)
        }
        Err(e) => (None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .init();

    if let Some(e) = open_error {
        tracing::warn!("Could not open log file '{}', logging to console only: {}", log_file.display(), e);
    }
}

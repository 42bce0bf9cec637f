//! sogc-check entry point.
//!
//! Loads configuration, installs logging and performs one resolution run.

use anyhow::Result;
use clap::Parser;
use sogc_cli::{app, args::Args, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.load_config()?;

    logging::init(&config.log_file);

    if let Err(e) = app::run(&config).await {
        tracing::error!("Fatal Error: {:#}", e);
        return Err(e);
    }

    Ok(())
}

//! One resolution run, from input file to persisted outputs.
//!
//! ### Order of operations
//!
//! 1. Load the cache (empty if missing or unreadable).
//! 2. Load the input names; stop early if there are none.
//! 3. Run the pipeline.
//! 4. Append new records to the results CSV.
//! 5. Save the cache.
//! 6. Rewrite the not-found file.
//!
//! Every file error is logged and the run continues with the next step.

use anyhow::{Context, Result};
use sogc_client::{ZefixClient, ZefixConfig};
use sogc_core::{
    AppConfig, Clock, Pacer, Pipeline, Registry, RequestPacer, ResolutionCache, RunOutcome, input, output,
};

/// Run against the live registry using `config`.
///
/// Returns `None` when there was nothing to process.
pub async fn run(config: &AppConfig) -> Result<Option<RunOutcome>> {
    let client = ZefixClient::new(ZefixConfig::from(config)).context("failed to build registry client")?;
    let pipeline = Pipeline::new(client, RequestPacer::new(config.request_delay()));

    Ok(run_with(config, &pipeline).await)
}

/// Run with an already assembled pipeline.
pub async fn run_with<R, P, C>(config: &AppConfig, pipeline: &Pipeline<R, P, C>) -> Option<RunOutcome>
where
    R: Registry,
    P: Pacer,
    C: Clock,
{
    tracing::info!("--- Starting new SOGC conformation run ---");

    let mut cache = ResolutionCache::load_or_default(&config.cache_file);
    let names = input::load_names(&config.input_file);

    if names.is_empty() {
        tracing::warn!("No companies to process. Exiting");
        return None;
    }

    let outcome = pipeline.run(&names, &mut cache).await;

    save_results(config, &outcome);

    match cache.save(&config.cache_file) {
        Ok(()) => tracing::info!(
            found = cache.found_count(),
            not_found = cache.absent_count(),
            "Cache saved to '{}' ({} entries)",
            config.cache_file.display(),
            cache.len()
        ),
        Err(e) => tracing::error!("Could not save cache to '{}'. Error: {}", config.cache_file.display(), e),
    }

    save_not_found(config, &outcome);

    let stats = outcome.stats;
    tracing::info!(
        total = stats.total(),
        cached_found = stats.cached_found,
        cached_absent = stats.cached_absent,
        queried = stats.queried,
        newly_found = stats.newly_found,
        not_found = outcome.not_found.len(),
        "run summary"
    );
    tracing::info!("--- SOGC conformation run finished ---");

    Some(outcome)
}

fn save_results(config: &AppConfig, outcome: &RunOutcome) {
    match output::append_results(&config.output_file, &outcome.found) {
        Ok(0) => tracing::info!("No *new* results to save."),
        Ok(n) => tracing::info!("Saved {} new results to '{}'", n, config.output_file.display()),
        Err(e) => tracing::error!("An error occurred while writing to the output file: {}", e),
    }
}

fn save_not_found(config: &AppConfig, outcome: &RunOutcome) {
    let path = &config.not_found_file;
    match output::write_not_found(path, &outcome.not_found) {
        Ok(()) if outcome.not_found.is_empty() => {
            tracing::info!("All companies processed. No remaining companies to save.")
        }
        Ok(()) => tracing::info!("Saved {} remaining companies to '{}'.", outcome.not_found.len(), path.display()),
        Err(e) => tracing::error!("Could not write remaining companies file '{}'. Error: {}", path.display(), e),
    }
}

//! The resolution pipeline.
//!
//! Drives an ordered list of company names through
//! cache check → registry search → match resolution → cache update.
//!
//! ### Per-name flow
//!
//! - **Cache hit (found)**: nothing is collected, no request is made.
//! - **Cache hit (absent)**: the name is collected as not found, no request.
//! - **Cache miss**: wait for the pacer, search the registry once, tell the
//!   pacer the request is over and resolve the exact match. A match is dated, collected as found and
//!   cached; anything else is collected as not found and cached as absent.
//!
//! Names are processed strictly in order and at most one registry request
//! is in flight at any time.

use chrono::{NaiveDate, Utc};

use crate::registry::{Registry, SearchOutcome};
use crate::throttle::Pacer;
use crate::{CacheLookup, CompanyName, CompanyRecord, ResolutionCache, resolver};

/// Source of the date stamped on new records.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Current UTC date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// How many names ended in each terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub cached_found: usize,
    pub cached_absent: usize,
    pub queried: usize,
    pub newly_found: usize,
}

impl RunStats {
    pub fn total(&self) -> usize {
        self.cached_found + self.cached_absent + self.queried
    }
}

/// Result of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Records resolved by the registry during this run.
    pub found: Vec<CompanyRecord>,
    /// Names not resolved, whether from the cache or from this run.
    pub not_found: Vec<CompanyName>,
    pub stats: RunStats,
}

/// Sequential, cache-first resolution pipeline.
pub struct Pipeline<R, P, C = SystemClock> {
    registry: R,
    pacer: P,
    clock: C,
}

impl<R: Registry, P: Pacer> Pipeline<R, P, SystemClock> {
    pub fn new(registry: R, pacer: P) -> Self {
        Self { registry, pacer, clock: SystemClock }
    }
}

impl<R: Registry, P: Pacer, C: Clock> Pipeline<R, P, C> {
    /// Replace the clock used to date new records.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Pipeline<R, P, C2> {
        Pipeline { registry: self.registry, pacer: self.pacer, clock }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Resolve every name, updating `cache` with each new outcome.
    pub async fn run(&self, names: &[CompanyName], cache: &mut ResolutionCache) -> RunOutcome {
        let mut outcome = RunOutcome::default();

        for name in names {
            match cache.lookup(name) {
                CacheLookup::Hit(record) => {
                    tracing::info!(link = %record.company_cantonal_exerpt_link, "Cache hit (Found): {}", name);
                    outcome.stats.cached_found += 1;
                    continue;
                }
                CacheLookup::HitAbsent => {
                    tracing::info!("Cache hit (Not Found): {}", name);
                    outcome.stats.cached_absent += 1;
                    outcome.not_found.push(name.clone());
                    continue;
                }
                CacheLookup::Miss => {}
            }

            outcome.stats.queried += 1;

            match self.query(name).await {
                Some(record) => {
                    tracing::info!("Found: {} -> {}", name, record.company_cantonal_exerpt_link);
                    cache.record(name, Some(record.clone()));
                    outcome.stats.newly_found += 1;
                    outcome.found.push(record);
                }
                None => {
                    tracing::warn!("Not found: {} (API error or no exact match)", name);
                    cache.record(name, None);
                    outcome.not_found.push(name.clone());
                }
            }
        }

        outcome
    }

    async fn query(&self, name: &CompanyName) -> Option<CompanyRecord> {
        self.pacer.wait_turn().await;

        tracing::info!("Querying API for: {}", name);
        let result = self.registry.search(name).await;
        self.pacer.request_done().await;

        match result {
            SearchOutcome::Found(candidates) => {
                tracing::debug!(company = %name, candidates = candidates.len(), "registry returned candidates");
                resolver::resolve(&candidates, name).map(|matched| matched.stamp(self.clock.today()))
            }
            SearchOutcome::Unavailable(reason) => {
                tracing::debug!(company = %name, %reason, "registry returned no data");
                None
            }
        }
    }
}

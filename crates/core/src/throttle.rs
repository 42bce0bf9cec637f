//! Inter-request pacing.
//!
//! The registry is queried one name at a time. After each response the next
//! request waits for at least a fixed interval, however long the previous
//! request took. Cache hits never reach the pacer.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Policy deciding when the next outbound request may start.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Wait until a request may be sent.
    async fn wait_turn(&self);

    /// Mark the end of a request, once its response (or failure) is in.
    async fn request_done(&self) {}
}

/// Enforces a minimum pause between the end of one request and the start
/// of the next.
///
/// The first request goes out immediately.
#[derive(Debug)]
pub struct RequestPacer {
    last_finished: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RequestPacer {
    pub fn new(min_interval: Duration) -> Self {
        Self { last_finished: Mutex::new(None), min_interval }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

#[async_trait]
impl Pacer for RequestPacer {
    async fn wait_turn(&self) {
        let last = *self.last_finished.lock().await;
        if let Some(prev) = last {
            let elapsed = prev.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                tracing::debug!(?wait, "pausing before next registry request");
                tokio::time::sleep(wait).await;
            }
        }
    }

    async fn request_done(&self) {
        *self.last_finished.lock().await = Some(Instant::now());
    }
}

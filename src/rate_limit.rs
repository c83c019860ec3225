//! Fixed-delay rate limiting toward the remote APIs
//!
//! Anonymous GitHub access allows about 60 requests per hour and pkg.go.dev is
//! only reachable anonymously. A flat pause before every call keeps a run
//! under both limits.

use std::time::Duration;

/// Default pause before each remote call
pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(1);

/// Pauses the calling pipeline for a fixed interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimiter {
    interval: Duration,
}

impl RateLimiter {
    /// Create a rate limiter with the given interval
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// The configured interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait for the full interval before returning
    pub async fn throttle(&self) {
        tracing::trace!(interval = ?self.interval, "cooling down");
        tokio::time::sleep(self.interval).await;
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN)
    }
}

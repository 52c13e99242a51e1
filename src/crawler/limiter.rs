//! Per-domain rate limiting and retry with backoff
//!
//! This module bounds request pressure on remote hosts two ways:
//! - `RateLimiter::admit` blocks until a request to a domain fits inside its
//!   trailing sixty-second window
//! - `request_with_backoff` retries a failed request with exponential delay
//!   and jitter before giving up

use rand::Rng;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Maximum retry attempts for a single request
pub const MAX_RETRIES: u32 = 5;

/// Base delay for the exponential backoff schedule
pub const BASE_RETRY_DELAY: Duration = Duration::from_secs(3);

/// Trailing window over which per-domain request timestamps are counted
const WINDOW: Duration = Duration::from_secs(60);

/// Per-domain sliding-window request throttle.
///
/// Each domain gets an ordered list of request timestamps inside the
/// trailing window. Before a request is admitted, stale timestamps are
/// pruned; after pruning, at most `requests_per_minute` timestamps remain.
/// When the window is full, the caller sleeps until the oldest timestamp
/// ages out, plus a small jitter so repeated waits do not synchronize.
pub struct RateLimiter {
    limit: usize,
    windows: HashMap<String, Vec<Instant>>,
}

impl RateLimiter {
    pub fn new(requests_per_minute: u32) -> Self {
        Self {
            limit: requests_per_minute as usize,
            windows: HashMap::new(),
        }
    }

    /// Blocks until a request to `domain` fits in the rate window, then
    /// records the request timestamp.
    ///
    /// Returns the time actually slept, which is zero when the window had
    /// room.
    pub async fn admit(&mut self, domain: &str) -> Duration {
        let now = Instant::now();

        let wait = {
            let stamps = self.windows.entry(domain.to_string()).or_default();
            stamps.retain(|ts| now.duration_since(*ts) < WINDOW);

            if stamps.len() >= self.limit {
                stamps.first().map(|oldest| {
                    let elapsed = now.duration_since(*oldest);
                    let jitter = rand::thread_rng().gen_range(0.1..=1.0);
                    WINDOW.saturating_sub(elapsed) + Duration::from_secs_f64(jitter)
                })
            } else {
                None
            }
        };

        let waited = wait.unwrap_or(Duration::ZERO);
        if !waited.is_zero() {
            tracing::info!(
                "Rate limiting for {}. Waiting {:.2} seconds",
                domain,
                waited.as_secs_f64()
            );
            tokio::time::sleep(waited).await;
        }

        if let Some(stamps) = self.windows.get_mut(domain) {
            stamps.push(Instant::now());
        }

        waited
    }
}

/// Runs `op` with exponential backoff on failure.
///
/// The delay before attempt `n` (zero-based) is
/// `base_delay * 2^n + jitter(0, 1s)`. Rate-limit responses (HTTP 429) and
/// other errors share the same schedule. After `max_retries` attempts the
/// last error propagates to the caller.
pub async fn request_with_backoff<T, E, F, Fut>(
    mut op: F,
    max_retries: u32,
    base_delay: Duration,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt: u32 = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                attempt += 1;
                if attempt >= max_retries {
                    tracing::error!("Max retries exceeded: {}", e);
                    return Err(e);
                }

                let jitter = Duration::from_secs_f64(rand::thread_rng().gen_range(0.0..1.0));
                let delay = base_delay * 2u32.pow(attempt - 1) + jitter;
                tracing::warn!(
                    "Request failed: {}. Retrying in {:.2} seconds...",
                    e,
                    delay.as_secs_f64()
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test(start_paused = true)]
    async fn test_admissions_within_limit_do_not_wait() {
        let mut limiter = RateLimiter::new(3);
        for _ in 0..3 {
            assert_eq!(limiter.admit("example.com").await, Duration::ZERO);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_admission_over_limit_waits_remaining_window() {
        let mut limiter = RateLimiter::new(2);
        limiter.admit("example.com").await;
        limiter.admit("example.com").await;

        // Third admission inside the same window must sleep at least the
        // remaining window time (here the full sixty seconds).
        let waited = limiter.admit("example.com").await;
        assert!(waited >= Duration::from_secs(60), "waited {:?}", waited);
    }

    #[tokio::test(start_paused = true)]
    async fn test_domains_are_throttled_independently() {
        let mut limiter = RateLimiter::new(1);
        limiter.admit("a.com").await;
        assert_eq!(limiter.admit("b.com").await, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_window_expiry_frees_capacity() {
        let mut limiter = RateLimiter::new(1);
        limiter.admit("example.com").await;

        tokio::time::advance(Duration::from_secs(61)).await;
        assert_eq!(limiter.admit("example.com").await, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_retries_until_success() {
        let attempts = Cell::new(0u32);
        let result: Result<u32, String> = request_with_backoff(
            || {
                let n = attempts.get() + 1;
                attempts.set(n);
                async move {
                    if n < 3 {
                        Err(format!("attempt {} failed", n))
                    } else {
                        Ok(n)
                    }
                }
            },
            MAX_RETRIES,
            Duration::from_secs(3),
        )
        .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(attempts.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_exhaustion_returns_last_error() {
        let attempts = Cell::new(0u32);
        let result: Result<(), String> = request_with_backoff(
            || {
                let n = attempts.get() + 1;
                attempts.set(n);
                async move { Err(format!("attempt {} failed", n)) }
            },
            MAX_RETRIES,
            Duration::from_secs(3),
        )
        .await;

        assert_eq!(result.unwrap_err(), "attempt 5 failed");
        assert_eq!(attempts.get(), MAX_RETRIES);
    }
}

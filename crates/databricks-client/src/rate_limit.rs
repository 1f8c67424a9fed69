//! Token-bucket rate limiting for outbound requests.

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::trace;

use crate::error::{Error, Result};

/// Token bucket with a capacity of one: a single-request burst, refilled at
/// the configured per-second rate.
#[derive(Debug)]
struct TokenBucket {
    tokens: f64,
    refill_rate: f64,
    last_refill: Instant,
}

impl TokenBucket {
    fn new(tokens_per_second: u32) -> Self {
        Self {
            tokens: 1.0,
            refill_rate: f64::from(tokens_per_second),
            last_refill: Instant::now(),
        }
    }

    fn refill(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_refill);
        self.tokens = (self.tokens + elapsed.as_secs_f64() * self.refill_rate).min(1.0);
        self.last_refill = now;
    }

    /// Consume a token, or report how long until one is available.
    fn try_acquire(&mut self) -> std::result::Result<(), Duration> {
        self.refill();

        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            Ok(())
        } else {
            let tokens_needed = 1.0 - self.tokens;
            let wait_secs = tokens_needed / self.refill_rate;
            Err(Duration::from_secs_f64(wait_secs))
        }
    }
}

/// Serializes request issuance across every caller sharing a client.
///
/// Clones share the same bucket.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    bucket: Arc<Mutex<TokenBucket>>,
}

impl RateLimiter {
    /// Create a limiter refilling at `tokens_per_second`.
    ///
    /// A zero rate would block every request forever, so it is rejected here
    /// instead of deadlocking at the first call. Callers that want no
    /// limiting leave the rate unset on the config.
    pub fn new(tokens_per_second: u32) -> Result<Self> {
        if tokens_per_second == 0 {
            return Err(Error::Config(
                "rate_limit_per_second must be positive; leave it unset for unlimited".to_string(),
            ));
        }

        Ok(Self {
            bucket: Arc::new(Mutex::new(TokenBucket::new(tokens_per_second))),
        })
    }

    /// Wait until a token is available.
    ///
    /// Cancel-safe: the bucket lock is never held across a sleep, and
    /// dropping the future while it waits leaves the bucket untouched.
    pub async fn acquire(&self) {
        loop {
            let wait = {
                let mut bucket = self.bucket.lock().await;
                match bucket.try_acquire() {
                    Ok(()) => return,
                    Err(wait) => wait,
                }
            };

            trace!(wait_ms = wait.as_millis() as u64, "rate limited, waiting for token");
            tokio::time::sleep(wait).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_rate_is_rejected() {
        let result = RateLimiter::new(0);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn bucket_starts_with_one_token() {
        let mut bucket = TokenBucket::new(10);
        assert!(bucket.try_acquire().is_ok());

        let wait = bucket.try_acquire().unwrap_err();
        assert!(wait > Duration::ZERO);
        assert!(wait <= Duration::from_millis(100));
    }

    #[test]
    fn bucket_never_accumulates_beyond_capacity() {
        let mut bucket = TokenBucket::new(1000);
        std::thread::sleep(Duration::from_millis(20));
        bucket.refill();
        assert!(bucket.tokens <= 1.0);
    }

    #[test]
    fn capacity_is_a_single_token_burst() {
        // Slow refill so the second acquire cannot sneak a refilled token.
        let mut bucket = TokenBucket::new(10);
        assert!(bucket.try_acquire().is_ok());
        assert!(bucket.try_acquire().is_err());
    }

    #[test]
    fn bucket_refills_at_configured_rate() {
        let mut bucket = TokenBucket::new(100);
        assert!(bucket.try_acquire().is_ok());

        std::thread::sleep(Duration::from_millis(15));
        assert!(
            bucket.try_acquire().is_ok(),
            "100 rps should refill a token within 15ms"
        );
    }

    #[tokio::test]
    async fn acquire_waits_for_refill() {
        let limiter = RateLimiter::new(100).unwrap();

        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        limiter.acquire().await;

        // Burst of one, then two refills at 10ms each.
        assert!(start.elapsed() >= Duration::from_millis(18));
    }

    #[tokio::test]
    async fn clones_share_the_bucket() {
        let limiter = RateLimiter::new(50).unwrap();
        let clone = limiter.clone();

        let start = Instant::now();
        limiter.acquire().await;
        clone.acquire().await;

        assert!(start.elapsed() >= Duration::from_millis(18));
    }
}

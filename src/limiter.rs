//! Client-side rate limiting for outbound generative-service calls
//!
//! Sliding-window counter keyed by action name. This is a soft guard against
//! accidental hammering from one process, not a security boundary; state is
//! in-memory only and disappears on restart. Bursts straddling a window edge
//! are possible and accepted.

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Action key for resume analysis and roadmap generation calls.
pub const ANALYSIS_KEY: &str = "analysis";
/// Action key for interview chat turns.
pub const CHAT_KEY: &str = "chat";

/// Resume analysis: 3 calls per minute.
pub const ANALYSIS_MAX_REQUESTS: usize = 3;
/// Interview chat: 5 calls per minute.
pub const CHAT_MAX_REQUESTS: usize = 5;
/// Shared window length for both policies.
pub const WINDOW: Duration = Duration::from_secs(60);

#[derive(Debug, Default)]
pub struct RateLimiter {
    request_timestamps: HashMap<String, Vec<Instant>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks whether a request under `key` is allowed right now. Accepted
    /// requests are recorded; rejected ones leave the window untouched.
    pub fn is_allowed(&mut self, key: &str, max_requests: usize, window: Duration) -> bool {
        self.allowed_at(key, max_requests, window, Instant::now())
    }

    fn allowed_at(&mut self, key: &str, max_requests: usize, window: Duration, now: Instant) -> bool {
        let timestamps = self.request_timestamps.entry(key.to_string()).or_default();

        // Evict entries older than the window, lazily, on each check
        timestamps.retain(|&t| now.duration_since(t) < window);

        if timestamps.len() >= max_requests {
            return false;
        }

        timestamps.push(now);
        true
    }

    /// Clears the window for `key` entirely. Used to un-count a failed
    /// attempt so a transport error does not eat the user's quota.
    pub fn reset(&mut self, key: &str) {
        self.request_timestamps.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_max_then_denies() {
        let mut limiter = RateLimiter::new();
        let now = Instant::now();

        for _ in 0..3 {
            assert!(limiter.allowed_at("analysis", 3, WINDOW, now));
        }
        assert!(!limiter.allowed_at("analysis", 3, WINDOW, now));
    }

    #[test]
    fn test_denied_call_leaves_state_unchanged() {
        let mut limiter = RateLimiter::new();
        let now = Instant::now();

        assert!(limiter.allowed_at("chat", 1, WINDOW, now));
        assert!(!limiter.allowed_at("chat", 1, WINDOW, now));
        // A denied call did not extend the window; expiry still happens on
        // the original timestamp
        let later = now + WINDOW + Duration::from_millis(1);
        assert!(limiter.allowed_at("chat", 1, WINDOW, later));
    }

    #[test]
    fn test_expired_timestamps_readmit_requests() {
        let mut limiter = RateLimiter::new();
        let now = Instant::now();

        for _ in 0..3 {
            assert!(limiter.allowed_at("analysis", 3, WINDOW, now));
        }
        assert!(!limiter.allowed_at("analysis", 3, WINDOW, now));

        let later = now + WINDOW + Duration::from_millis(1);
        assert!(limiter.allowed_at("analysis", 3, WINDOW, later));
    }

    #[test]
    fn test_reset_fully_readmits() {
        let mut limiter = RateLimiter::new();
        let now = Instant::now();

        for _ in 0..3 {
            limiter.allowed_at("analysis", 3, WINDOW, now);
        }
        assert!(!limiter.allowed_at("analysis", 3, WINDOW, now));

        limiter.reset("analysis");
        for _ in 0..3 {
            assert!(limiter.allowed_at("analysis", 3, WINDOW, now));
        }
    }

    #[test]
    fn test_keys_are_independent() {
        let mut limiter = RateLimiter::new();
        let now = Instant::now();

        assert!(limiter.allowed_at("analysis", 1, WINDOW, now));
        assert!(!limiter.allowed_at("analysis", 1, WINDOW, now));
        assert!(limiter.allowed_at("chat", 1, WINDOW, now));
    }
}

//! Retry and backoff policy for per-URL download attempts.

use std::time::Duration;

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Attempt budget spent; record the URL as failed.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Linear backoff policy: after failed attempt N, wait `N * step` before the
/// next try (3 s, 6 s, ... with the default step).
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Backoff step multiplied by the attempt index.
    pub step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            step: Duration::from_secs(3),
        }
    }
}

impl RetryPolicy {
    /// Compute the decision after failed attempt `attempt` (1-based).
    pub fn decide(&self, attempt: u32) -> RetryDecision {
        if attempt >= self.max_attempts {
            RetryDecision::NoRetry
        } else {
            RetryDecision::RetryAfter(self.step.saturating_mul(attempt))
        }
    }
}

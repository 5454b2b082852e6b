//! Retry strategy abstraction for resilient operations.
//!
//! This module provides a trait and a fixed-delay implementation for retry
//! logic with configurable back-off between attempts.

use std::future::Future;
use std::time::Duration;

use crate::config::retry as retry_config;

/// Trait for defining retry strategies.
///
/// Implementations define how many attempts to make and how long to wait
/// between each attempt.
pub trait RetryStrategy {
    /// Maximum number of attempts, including the first one.
    fn max_attempts(&self) -> u32;

    /// Delay after the given failed attempt (0-indexed).
    ///
    /// Returns `None` if no delay should be applied.
    fn delay_for_attempt(&self, attempt: u32) -> Option<Duration>;

    /// Execute an async operation with retry logic.
    ///
    /// Calls `f` up to `max_attempts()` times, sleeping `delay_for_attempt()`
    /// between failed attempts. The last error is returned once attempts are
    /// exhausted; there is no delay after the final attempt.
    fn execute<T, E, F, Fut>(&self, mut f: F) -> impl Future<Output = Result<T, E>>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let max = self.max_attempts().max(1);
        let delays: Vec<Option<Duration>> =
            (0..max).map(|attempt| self.delay_for_attempt(attempt)).collect();

        async move {
            let mut attempt = 0;
            loop {
                match f(attempt).await {
                    Ok(value) => return Ok(value),
                    Err(e) if attempt + 1 >= max => return Err(e),
                    Err(_) => {
                        if let Some(delay) = delays[attempt as usize] {
                            tokio::time::sleep(delay).await;
                        }
                        attempt += 1;
                    }
                }
            }
        }
    }
}

/// Fixed delay retry strategy.
///
/// Waits a constant duration between each attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDelay {
    max_attempts: u32,
    delay: Duration,
}

impl FixedDelay {
    /// Create a new fixed delay strategy.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

impl Default for FixedDelay {
    /// Three attempts, one second apart.
    fn default() -> Self {
        Self::new(retry_config::MAX_ATTEMPTS, retry_config::DELAY)
    }
}

impl RetryStrategy for FixedDelay {
    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn delay_for_attempt(&self, _attempt: u32) -> Option<Duration> {
        Some(self.delay)
    }
}

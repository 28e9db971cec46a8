/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_DELAY_SECS};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Decides whether and when a GET request is repeated
///
/// `attempt` is 1-based: after the first request failed with a retryable
/// status, `delay(1)` is the pause before the second request.
pub trait BackoffStrategy: Send + Sync {
    /// Total number of requests allowed, first try included
    fn max_attempts(&self) -> u32;

    /// Pause before the request following `attempt`
    fn delay(&self, attempt: u32) -> Duration;

    /// Whether a response with `status` should be repeated
    fn is_retryable(&self, status: StatusCode) -> bool;
}

/// Fixed-delay retry policy
///
/// The default retries only `429 Too Many Requests`, makes at most 3 requests
/// and waits 60 seconds between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Total number of requests, first try included (0 is treated as 1)
    pub max_attempts: u32,
    /// Pause between requests, in milliseconds
    pub delay_ms: u64,
    /// Status codes that trigger another attempt
    pub retry_statuses: Vec<u16>,
}

impl RetryConfig {
    /// Creates the default policy: 3 attempts, 60 seconds apart, on 429 only
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default policy with a different attempt count
    #[must_use]
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    /// Default policy with both attempt count and delay (in seconds) replaced
    #[must_use]
    pub fn with_max_attempts_and_delay(max_attempts: u32, delay_secs: u64) -> Self {
        Self {
            max_attempts,
            delay_ms: delay_secs.saturating_mul(1000),
            ..Self::default()
        }
    }

    /// Replaces the pause between attempts
    #[must_use]
    pub fn delay_of(mut self, delay: Duration) -> Self {
        self.delay_ms = delay.as_millis().try_into().unwrap_or(u64::MAX);
        self
    }

    /// Adds another retryable status
    #[must_use]
    pub fn also_retry_on(mut self, status: StatusCode) -> Self {
        if !self.retry_statuses.contains(&status.as_u16()) {
            self.retry_statuses.push(status.as_u16());
        }
        self
    }

    /// A policy that never retries
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            delay_ms: 0,
            retry_statuses: Vec::new(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay_ms: DEFAULT_RETRY_DELAY_SECS * 1000,
            retry_statuses: vec![StatusCode::TOO_MANY_REQUESTS.as_u16()],
        }
    }
}

impl BackoffStrategy for RetryConfig {
    fn max_attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    fn delay(&self, _attempt: u32) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    fn is_retryable(&self, status: StatusCode) -> bool {
        self.retry_statuses.contains(&status.as_u16())
    }
}

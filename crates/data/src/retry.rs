//! Retry with exponential backoff and jitter, applied at the fetch boundary.

use std::{future::Future, time::Duration};

use portstat_primitives::Ticker;
use portstat_traits::SourceError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Backoff strategy between retries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Backoff {
    /// Fixed delay between retries.
    Fixed {
        /// Delay in milliseconds.
        delay_ms: u64,
    },
    /// Delay of `base_ms * factor^attempt`, capped at `max_ms`.
    Exponential {
        /// Initial delay in milliseconds.
        base_ms: u64,
        /// Multiplier per attempt.
        factor: f64,
        /// Upper bound in milliseconds.
        max_ms: u64,
        /// Apply +/- 50% random jitter.
        jitter: bool,
    },
}

impl Default for Backoff {
    fn default() -> Self {
        Self::Exponential { base_ms: 250, factor: 2.0, max_ms: 4_000, jitter: true }
    }
}

impl Backoff {
    /// Delay before retry number `attempt` (0-based).
    #[must_use]
    pub fn delay(self, attempt: u32) -> Duration {
        match self {
            Self::Fixed { delay_ms } => Duration::from_millis(delay_ms),
            Self::Exponential { base_ms, factor, max_ms, jitter } => {
                let scaled = base_ms as f64 * factor.powi(attempt as i32);
                let capped = scaled.min(max_ms as f64).max(0.0) as u64;

                if jitter && capped > 0 {
                    let spread = capped / 2;
                    let offset = fastrand::u64(0..=spread * 2);
                    Duration::from_millis(capped - spread + offset)
                } else {
                    Duration::from_millis(capped)
                }
            }
        }
    }
}

/// Retry policy for transient fetch failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum retries after the first attempt.
    pub max_retries: u32,
    /// Backoff between attempts.
    pub backoff: Backoff,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_retries: 3, backoff: Backoff::default() }
    }
}

impl RetryConfig {
    /// Disable retries.
    #[must_use]
    pub fn no_retry() -> Self {
        Self { max_retries: 0, ..Self::default() }
    }

    /// Fixed-delay retries.
    #[must_use]
    pub const fn fixed(delay_ms: u64, max_retries: u32) -> Self {
        Self { max_retries, backoff: Backoff::Fixed { delay_ms } }
    }
}

/// Run `op`, retrying transient errors according to `config`.
///
/// Non-transient errors and the error of the final attempt are returned
/// unchanged.
///
/// # Errors
/// Returns the last `SourceError` once retries are exhausted or the error is
/// not transient.
pub async fn retry_fetch<T, F, Fut>(
    config: &RetryConfig,
    ticker: &Ticker,
    mut op: F,
) -> Result<T, SourceError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SourceError>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_transient() && attempt < config.max_retries => {
                let delay = config.backoff.delay(attempt);
                warn!(
                    %ticker,
                    attempt = attempt + 1,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "retrying fetch"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

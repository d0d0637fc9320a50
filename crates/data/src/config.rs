//! Source configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::RetryConfig;

/// Configuration for network price sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Upper bound on a single fetch, in milliseconds.
    pub timeout_ms: u64,
    /// Retry policy for transient failures.
    pub retry: RetryConfig,
    /// Cache lifetime in seconds; `None` disables caching.
    pub cache_ttl_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self { timeout_ms: 30_000, retry: RetryConfig::default(), cache_ttl_secs: None }
    }
}

impl SourceConfig {
    /// Per-fetch timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Cache lifetime, if caching is enabled.
    #[must_use]
    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache_ttl_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SourceConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.retry.max_retries, 3);
        assert!(config.cache_ttl().is_none());
    }
}

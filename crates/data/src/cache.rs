//! Time-bounded in-memory cache in front of a price source.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use portstat_primitives::{Date, PriceSeries, Ticker};
use portstat_traits::{PriceSource, SourceError};
use tokio::sync::RwLock;
use tracing::debug;

type CacheKey = (Ticker, Date, Option<Date>);

#[derive(Debug, Clone)]
struct CacheEntry {
    series: PriceSeries,
    expires_at: Instant,
}

/// Wraps a [`PriceSource`] and reuses successful fetches for `ttl`.
///
/// Entries are keyed by `(ticker, start, end)`. Failures are never cached.
#[derive(Debug)]
pub struct CachedPriceSource<S> {
    inner: S,
    ttl: Duration,
    entries: RwLock<HashMap<CacheKey, CacheEntry>>,
}

impl<S: PriceSource> CachedPriceSource<S> {
    /// Wrap `inner` with a cache of lifetime `ttl`.
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self { inner, ttl, entries: RwLock::new(HashMap::new()) }
    }

    /// The wrapped source.
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Number of stored entries, including expired ones.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop expired entries.
    pub async fn clear_expired(&self) {
        let now = Instant::now();
        self.entries.write().await.retain(|_, entry| entry.expires_at > now);
    }

    /// Drop all entries.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    async fn lookup(&self, key: &CacheKey) -> Option<PriceSeries> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| Instant::now() < entry.expires_at)
            .map(|entry| entry.series.clone())
    }
}

impl<S: PriceSource> PriceSource for CachedPriceSource<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn fetch(
        &self,
        ticker: &Ticker,
        start: Date,
        end: Option<Date>,
    ) -> Result<PriceSeries, SourceError> {
        let key = (ticker.clone(), start, end);
        if let Some(series) = self.lookup(&key).await {
            debug!(%ticker, source = self.inner.name(), "cache hit");
            return Ok(series);
        }

        debug!(%ticker, source = self.inner.name(), "cache miss");
        let series = self.inner.fetch(ticker, start, end).await?;
        if !self.ttl.is_zero() {
            let entry = CacheEntry { series: series.clone(), expires_at: Instant::now() + self.ttl };
            self.entries.write().await.insert(key, entry);
        }
        Ok(series)
    }
}

//! Price source backed by series held in memory.

use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
};

use portstat_primitives::{AlignedDateRange, Date, EndBoundary, PriceSeries, Ticker};
use portstat_traits::{PriceSource, SourceError};

/// Serves preloaded series, for offline runs and tests.
#[derive(Debug, Default)]
pub struct InMemoryPriceSource {
    series: HashMap<Ticker, PriceSeries>,
    fetches: AtomicUsize,
}

impl InMemoryPriceSource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a series, replacing any previous series for the same ticker.
    #[must_use]
    pub fn with_series(mut self, series: PriceSeries) -> Self {
        self.insert(series);
        self
    }

    /// Add a series, replacing any previous series for the same ticker.
    pub fn insert(&mut self, series: PriceSeries) {
        self.series.insert(series.ticker.clone(), series);
    }

    /// Number of `fetch` calls served so far, successful or not.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl PriceSource for InMemoryPriceSource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch(
        &self,
        ticker: &Ticker,
        start: Date,
        end: Option<Date>,
    ) -> Result<PriceSeries, SourceError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        let series = self.series.get(ticker).ok_or_else(|| SourceError::NoData(ticker.to_string()))?;
        let window = AlignedDateRange::new(start, end.unwrap_or(Date::MAX));
        let windowed = series.window(&window, EndBoundary::Exclusive);
        if windowed.is_empty() {
            return Err(SourceError::NoData(ticker.to_string()));
        }
        Ok(windowed)
    }
}

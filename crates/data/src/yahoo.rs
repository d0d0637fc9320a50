//! Yahoo Finance price source.

use std::{fmt::Display, future::Future, time::Duration};

use chrono::DateTime;
use portstat_primitives::{AlignedDateRange, Date, EndBoundary, PricePoint, PriceSeries, Ticker};
use portstat_traits::{PriceSource, SourceError};
use time::OffsetDateTime;
use tracing::{debug, warn};
use yahoo_finance_api as yahoo;

use crate::{SourceConfig, retry_fetch};

/// Daily adjusted-close history from Yahoo Finance.
pub struct YahooPriceSource {
    connector: yahoo::YahooConnector,
    config: SourceConfig,
}

impl std::fmt::Debug for YahooPriceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YahooPriceSource").field("config", &self.config).finish_non_exhaustive()
    }
}

impl YahooPriceSource {
    /// Create a source with default configuration.
    ///
    /// # Errors
    /// Returns `SourceError::Client` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, SourceError> {
        Self::with_config(SourceConfig::default())
    }

    /// Create a source with custom configuration.
    ///
    /// # Errors
    /// Returns `SourceError::Client` if the HTTP client cannot be built.
    pub fn with_config(config: SourceConfig) -> Result<Self, SourceError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| SourceError::Client(e.to_string()))?;
        Ok(Self { connector, config })
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &SourceConfig {
        &self.config
    }

    async fn fetch_once(
        &self,
        ticker: &Ticker,
        start: Date,
        end: Option<Date>,
    ) -> Result<PriceSeries, SourceError> {
        let period_start = to_offset(start)?;
        let period_end = match end {
            Some(end) => to_offset(end)?,
            None => OffsetDateTime::now_utc(),
        };

        let request = self.connector.get_quote_history(ticker.as_str(), period_start, period_end);
        let response = bounded(self.config.timeout(), request).await?;

        let utc_offset = response.metadata().map_or_else(
            |e| {
                debug!(%ticker, error = %e, "no exchange metadata, dating quotes in UTC");
                0
            },
            |meta| i64::from(meta.gmtoffset),
        );

        let quotes = response.quotes().map_err(|e| {
            debug!(%ticker, error = %e, "provider returned no quotes");
            SourceError::NoData(ticker.to_string())
        })?;

        let raw = quotes
            .iter()
            .filter_map(|q| i64::try_from(q.timestamp).ok().map(|ts| (ts, q.adjclose)));
        series_from_raw(ticker, raw, utc_offset, start, end)
    }
}

impl PriceSource for YahooPriceSource {
    fn name(&self) -> &str {
        "yahoo"
    }

    async fn fetch(
        &self,
        ticker: &Ticker,
        start: Date,
        end: Option<Date>,
    ) -> Result<PriceSeries, SourceError> {
        debug!(%ticker, %start, ?end, "fetching price history");
        let series =
            retry_fetch(&self.config.retry, ticker, || self.fetch_once(ticker, start, end)).await?;
        debug!(%ticker, observations = series.len(), "fetched price history");
        Ok(series)
    }
}

/// Await `request` for at most `limit`.
async fn bounded<T, E: Display>(
    limit: Duration,
    request: impl Future<Output = Result<T, E>>,
) -> Result<T, SourceError> {
    match tokio::time::timeout(limit, request).await {
        Ok(result) => result.map_err(|e| SourceError::Unreachable(e.to_string())),
        Err(_) => Err(SourceError::Timeout(u64::try_from(limit.as_millis()).unwrap_or(u64::MAX))),
    }
}

/// Midnight UTC of `date`.
fn to_offset(date: Date) -> Result<OffsetDateTime, SourceError> {
    let secs = date
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp())
        .ok_or_else(|| SourceError::Malformed(format!("unrepresentable date {date}")))?;
    OffsetDateTime::from_unix_timestamp(secs).map_err(|e| SourceError::Malformed(e.to_string()))
}

/// Build a series from `(unix seconds, adjusted close)` pairs.
///
/// Quotes are dated by the exchange's calendar day, `utc_offset` seconds
/// east of UTC. Non-finite or non-positive prices are dropped, as are quotes
/// outside `[start, end)`.
fn series_from_raw(
    ticker: &Ticker,
    raw: impl IntoIterator<Item = (i64, f64)>,
    utc_offset: i64,
    start: Date,
    end: Option<Date>,
) -> Result<PriceSeries, SourceError> {
    let mut points = Vec::new();
    let mut dropped = 0_usize;

    for (ts, adj_close) in raw {
        let date = ts
            .checked_add(utc_offset)
            .and_then(|local| DateTime::from_timestamp(local, 0))
            .map(|dt| dt.date_naive())
            .ok_or_else(|| SourceError::Malformed(format!("timestamp {ts} out of range")))?;
        if !adj_close.is_finite() || adj_close <= 0.0 {
            dropped += 1;
            continue;
        }
        points.push(PricePoint::new(date, adj_close));
    }

    if dropped > 0 {
        warn!(%ticker, dropped, "dropped unusable quotes");
    }

    let window = AlignedDateRange::new(start, end.unwrap_or(Date::MAX));
    let series = PriceSeries::new(ticker.clone(), points).window(&window, EndBoundary::Exclusive);
    if series.is_empty() {
        return Err(SourceError::NoData(ticker.to_string()));
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd_opt(y, m, day).unwrap()
    }

    // 2024-01-02 14:30:00 UTC, a typical US session open timestamp
    const JAN_2: i64 = 1_704_205_800;
    const DAY: i64 = 86_400;

    #[test]
    fn converts_timestamps_to_trading_dates() {
        let ticker = Ticker::new("A");
        let raw = vec![(JAN_2, 100.0), (JAN_2 + DAY, 101.0), (JAN_2 + 2 * DAY, 102.0)];
        let series = series_from_raw(&ticker, raw, 0, d(1900, 1, 1), None).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.first_date(), Some(d(2024, 1, 2)));
        assert_eq!(series.last_date(), Some(d(2024, 1, 4)));
        assert_eq!(series.points()[1].adj_close, 101.0);
    }

    #[test]
    fn drops_unusable_prices() {
        let ticker = Ticker::new("A");
        let raw = vec![(JAN_2, 100.0), (JAN_2 + DAY, f64::NAN), (JAN_2 + 2 * DAY, 0.0)];
        let series = series_from_raw(&ticker, raw, 0, d(1900, 1, 1), None).unwrap();
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn end_is_exclusive() {
        let ticker = Ticker::new("A");
        let raw = vec![(JAN_2, 100.0), (JAN_2 + DAY, 101.0), (JAN_2 + 2 * DAY, 102.0)];
        let series =
            series_from_raw(&ticker, raw, 0, d(2024, 1, 1), Some(d(2024, 1, 4))).unwrap();
        assert_eq!(series.last_date(), Some(d(2024, 1, 3)));
    }

    #[test]
    fn empty_history_is_no_data() {
        let ticker = Ticker::new("ZZZZ");
        let err = series_from_raw(&ticker, Vec::new(), 0, d(1900, 1, 1), None).unwrap_err();
        assert_eq!(err, SourceError::NoData("ZZZZ".to_string()));
    }

    #[test]
    fn dates_follow_exchange_offset() {
        // 2024-01-02 10:00 in Sydney (UTC+11) is still 2024-01-01 in UTC
        const SYDNEY_OPEN: i64 = 1_704_150_000;
        const AEDT: i64 = 11 * 3_600;
        let ticker = Ticker::new("BHP.AX");

        let local = series_from_raw(&ticker, vec![(SYDNEY_OPEN, 45.0)], AEDT, d(1900, 1, 1), None)
            .unwrap();
        assert_eq!(local.first_date(), Some(d(2024, 1, 2)));

        let utc =
            series_from_raw(&ticker, vec![(SYDNEY_OPEN, 45.0)], 0, d(1900, 1, 1), None).unwrap();
        assert_eq!(utc.first_date(), Some(d(2024, 1, 1)));
    }

    #[test]
    fn negative_offset_keeps_us_session_date() {
        // 2024-01-02 09:30 in New York (UTC-5)
        let ticker = Ticker::new("A");
        let series =
            series_from_raw(&ticker, vec![(JAN_2, 100.0)], -5 * 3_600, d(1900, 1, 1), None)
                .unwrap();
        assert_eq!(series.first_date(), Some(d(2024, 1, 2)));
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_request_times_out() {
        let stalled = std::future::pending::<Result<(), String>>();
        let err = bounded(Duration::from_millis(250), stalled).await.unwrap_err();
        assert_eq!(err, SourceError::Timeout(250));
    }

    #[tokio::test]
    async fn request_error_is_unreachable() {
        let failed = async { Err::<(), _>("connection refused") };
        let err = bounded(Duration::from_secs(1), failed).await.unwrap_err();
        assert_eq!(err, SourceError::Unreachable("connection refused".to_string()));
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn ready_request_passes_through() {
        let value = bounded(Duration::from_secs(1), async { Ok::<_, String>(7) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn offset_for_pre_epoch_dates() {
        let offset = to_offset(d(1900, 1, 1)).unwrap();
        assert!(offset.unix_timestamp() < 0);
        assert_eq!(to_offset(d(1970, 1, 1)).unwrap().unix_timestamp(), 0);
    }
}

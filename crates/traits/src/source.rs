//! Price source trait definitions.

use std::{future::Future, sync::Arc};

use portstat_primitives::{Date, PriceSeries, Ticker};

/// Errors a price source can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The client could not be constructed.
    #[error("client error: {0}")]
    Client(String),

    /// The provider could not be reached or returned a transport failure.
    #[error("provider unreachable: {0}")]
    Unreachable(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The provider answered but holds no observations for the ticker.
    #[error("no price data for {0}")]
    NoData(String),

    /// The provider answered with data that cannot be used.
    #[error("malformed price data: {0}")]
    Malformed(String),
}

impl SourceError {
    /// Returns whether retrying the same request may succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Unreachable(_) | Self::Timeout(_))
    }
}

/// A provider of daily adjusted-close price history.
pub trait PriceSource: Send + Sync {
    /// Short name of the provider, used in logs.
    fn name(&self) -> &str;

    /// Fetch the daily history of `ticker` from `start`.
    ///
    /// `end` is exclusive; `None` fetches through the present. The returned
    /// series is ascending by date and may be empty only if the provider
    /// reports no error for an unknown ticker; implementations should prefer
    /// [`SourceError::NoData`].
    ///
    /// # Errors
    /// Returns `SourceError` if the provider is unreachable, times out, or
    /// has no usable data.
    fn fetch(
        &self,
        ticker: &Ticker,
        start: Date,
        end: Option<Date>,
    ) -> impl Future<Output = Result<PriceSeries, SourceError>> + Send;
}

impl<S: PriceSource> PriceSource for Arc<S> {
    fn name(&self) -> &str {
        self.as_ref().name()
    }

    fn fetch(
        &self,
        ticker: &Ticker,
        start: Date,
        end: Option<Date>,
    ) -> impl Future<Output = Result<PriceSeries, SourceError>> + Send {
        self.as_ref().fetch(ticker, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_is_transient() {
        assert!(SourceError::Timeout(5_000).is_transient());
        assert!(SourceError::Unreachable("connection reset".to_string()).is_transient());
        assert!(!SourceError::NoData("ZZZZ".to_string()).is_transient());
        assert!(!SourceError::Malformed("negative price".to_string()).is_transient());
    }

    #[test]
    fn source_error_display() {
        let err = SourceError::Timeout(250);
        assert_eq!(err.to_string(), "request timed out after 250 ms");

        let err = SourceError::NoData("ZZZZ".to_string());
        assert_eq!(err.to_string(), "no price data for ZZZZ");
    }
}

//! Error types for portfolio analysis.

use portstat_math::MathError;
use portstat_primitives::{Date, TableError, Ticker};
use portstat_traits::SourceError;
use portstat_utils::UtilsError;

/// Errors that can occur while analyzing a portfolio.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Tickers and weights differ in length.
    #[error("{tickers} tickers but {weights} weights")]
    TickerWeightCountMismatch {
        /// Number of tickers.
        tickers: usize,
        /// Number of weights.
        weights: usize,
    },

    /// Price history could not be retrieved.
    #[error("price data unavailable for {ticker}: {source}")]
    DataUnavailable {
        /// Ticker whose fetch failed.
        ticker: Ticker,
        /// Underlying source failure.
        source: SourceError,
    },

    /// The price histories do not overlap.
    #[error("no common date range: start {start} is after end {end}")]
    EmptyAlignedRange {
        /// Latest first date.
        start: Date,
        /// Earliest last date.
        end: Date,
    },

    /// No tickers were given.
    #[error("portfolio has no tickers")]
    EmptyPortfolio,

    /// A ticker entry is blank.
    #[error("empty ticker at position {position}")]
    InvalidTicker {
        /// Zero-based position in the ticker list.
        position: usize,
    },

    /// A weight entry is not a number.
    #[error("invalid weight {value:?} at position {position}")]
    InvalidWeight {
        /// Zero-based position in the weight list.
        position: usize,
        /// Raw text of the entry.
        value: String,
    },

    /// Too few observations for the requested statistic.
    #[error("insufficient data: required {required}, got {actual}")]
    InsufficientData {
        /// Required observations.
        required: usize,
        /// Available observations.
        actual: usize,
    },

    /// Math error.
    #[error("math error: {0}")]
    Math(#[from] MathError),

    /// Frame utility error.
    #[error("frame error: {0}")]
    Utils(#[from] UtilsError),

    /// Returns table invariant violated.
    #[error("returns table error: {0}")]
    Table(#[from] TableError),

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl ModelError {
    /// Returns whether the error rejects the caller's input, as opposed to a
    /// data or processing failure.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::TickerWeightCountMismatch { .. }
                | Self::EmptyPortfolio
                | Self::InvalidTicker { .. }
                | Self::InvalidWeight { .. }
        )
    }

    /// Plain-text message suitable for showing to an end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::TickerWeightCountMismatch { .. } => {
                "Error: The number of weights does not match the number of tickers.".to_string()
            }
            Self::DataUnavailable { ticker, .. } => {
                format!("Error: Could not retrieve price data for {ticker}.")
            }
            Self::EmptyAlignedRange { .. } => {
                "Error: The price histories of the selected tickers do not overlap.".to_string()
            }
            Self::EmptyPortfolio => "Error: Please provide at least one ticker.".to_string(),
            Self::InvalidTicker { position } => {
                format!("Error: Ticker number {} is empty.", position + 1)
            }
            Self::InvalidWeight { value, .. } => {
                format!("Error: The weight '{value}' is not a valid number.")
            }
            Self::InsufficientData { .. } => {
                "Error: Not enough overlapping price history to compute statistics.".to_string()
            }
            Self::Math(_) | Self::Utils(_) | Self::Table(_) | Self::Polars(_) => {
                format!("Error: {self}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn mismatch_user_message() {
        let err = ModelError::TickerWeightCountMismatch { tickers: 3, weights: 2 };
        assert_eq!(
            err.user_message(),
            "Error: The number of weights does not match the number of tickers."
        );
        assert!(err.to_string().contains('3'));
    }

    #[test]
    fn data_unavailable_names_ticker() {
        let err = ModelError::DataUnavailable {
            ticker: Ticker::new("ZZZZ"),
            source: SourceError::NoData("ZZZZ".to_string()),
        };
        assert!(err.user_message().contains("ZZZZ"));
        assert!(err.to_string().contains("no price data for ZZZZ"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[rstest]
    #[case(ModelError::TickerWeightCountMismatch { tickers: 1, weights: 2 }, true)]
    #[case(ModelError::EmptyPortfolio, true)]
    #[case(ModelError::InvalidTicker { position: 0 }, true)]
    #[case(ModelError::InvalidWeight { position: 0, value: "x".to_string() }, true)]
    #[case(ModelError::InsufficientData { required: 2, actual: 1 }, false)]
    #[case(ModelError::Math(MathError::EmptyData), false)]
    fn user_error_classification(#[case] err: ModelError, #[case] expected: bool) {
        assert_eq!(err.is_user_error(), expected);
        assert!(err.user_message().starts_with("Error: "));
    }
}

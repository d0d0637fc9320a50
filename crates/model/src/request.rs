//! Portfolio request parsing.

use portstat_primitives::{Ticker, WeightVector};

use crate::ModelError;

/// Tickers and positionally aligned weights of a portfolio.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioRequest {
    tickers: Vec<Ticker>,
    weights: WeightVector,
}

impl PortfolioRequest {
    /// Build a request, checking that tickers and weights pair up.
    ///
    /// # Errors
    /// Returns `ModelError::EmptyPortfolio` for no tickers and
    /// `ModelError::TickerWeightCountMismatch` if the lengths differ.
    pub fn new(tickers: Vec<Ticker>, weights: WeightVector) -> Result<Self, ModelError> {
        if weights.len() != tickers.len() {
            return Err(ModelError::TickerWeightCountMismatch {
                tickers: tickers.len(),
                weights: weights.len(),
            });
        }
        if tickers.is_empty() {
            return Err(ModelError::EmptyPortfolio);
        }
        Ok(Self { tickers, weights })
    }

    /// Parse comma-separated tickers and weights, e.g. `"AAPL, MSFT"` and
    /// `"0.6, 0.4"`.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidTicker` for a blank ticker entry,
    /// `ModelError::InvalidWeight` for a weight that is not a number, and the
    /// errors of [`new`](Self::new).
    pub fn parse(tickers: &str, weights: &str) -> Result<Self, ModelError> {
        let tickers = parse_tickers(tickers)?;
        let weights = parse_weights(weights)?;
        Self::new(tickers, weights)
    }

    /// Requested tickers, in portfolio order.
    #[must_use]
    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    /// Weights aligned with [`tickers`](Self::tickers).
    #[must_use]
    pub const fn weights(&self) -> &WeightVector {
        &self.weights
    }
}

fn parse_tickers(input: &str) -> Result<Vec<Ticker>, ModelError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(position, entry)| {
            if entry.is_empty() {
                Err(ModelError::InvalidTicker { position })
            } else {
                Ok(Ticker::new(entry))
            }
        })
        .collect()
}

fn parse_weights(input: &str) -> Result<WeightVector, ModelError> {
    if input.trim().is_empty() {
        return Ok(WeightVector::new(Vec::new()));
    }
    input
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(position, entry)| {
            entry
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite())
                .ok_or_else(|| ModelError::InvalidWeight { position, value: entry.to_string() })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(WeightVector::new)
}

//! Correlation matrix definitions.

use ndarray::Array2;

use crate::Ticker;

/// Pairwise correlation of asset returns.
///
/// Square and symmetric, labeled positionally by ticker. Entries involving a
/// zero-variance asset are NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    tickers: Vec<Ticker>,
    values: Array2<f64>,
}

impl CorrelationMatrix {
    /// Create a correlation matrix.
    #[must_use]
    pub fn new(tickers: Vec<Ticker>, values: Array2<f64>) -> Self {
        debug_assert_eq!(values.nrows(), values.ncols());
        debug_assert_eq!(values.nrows(), tickers.len());
        Self { tickers, values }
    }

    /// Row and column labels.
    #[must_use]
    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    /// Underlying matrix.
    #[must_use]
    pub const fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Number of assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    /// Correlation between the assets at positions `i` and `j`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get((i, j)).copied()
    }

    /// Correlation between the first assets labeled `a` and `b`.
    #[must_use]
    pub fn by_ticker(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.tickers.iter().position(|t| t.as_str() == a)?;
        let j = self.tickers.iter().position(|t| t.as_str() == b)?;
        self.get(i, j)
    }

    /// Positions whose correlations are undefined (NaN diagonal).
    #[must_use]
    pub fn degenerate(&self) -> Vec<usize> {
        (0..self.len()).filter(|&i| self.values[[i, i]].is_nan()).collect()
    }
}

//! Annualized portfolio return and volatility.

use ndarray::Array1;
use portstat_math::{annualize_return, annualize_volatility, mean, round_to, sample_std};
use portstat_primitives::{PortfolioMetrics, ReturnsTable, WeightVector};

use crate::ModelError;

/// Decimal places kept in reported percentages.
const PERCENT_DECIMALS: u32 = 2;

/// Computes fixed-weight portfolio statistics from a returns table.
///
/// The daily portfolio return is the dot product of each row with the
/// weights. Weights are used as given, without normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortfolioMetricsEngine;

impl PortfolioMetricsEngine {
    /// Create a new engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Daily portfolio returns, one per row of `table`.
    ///
    /// # Errors
    /// Returns `ModelError::TickerWeightCountMismatch` if the weights do not
    /// match the table's columns.
    pub fn portfolio_returns(
        &self,
        table: &ReturnsTable,
        weights: &WeightVector,
    ) -> Result<Array1<f64>, ModelError> {
        if weights.len() != table.n_assets() {
            return Err(ModelError::TickerWeightCountMismatch {
                tickers: table.n_assets(),
                weights: weights.len(),
            });
        }
        Ok(table.values().dot(&weights.to_array()))
    }

    /// Annualized return and standard deviation in percent, rounded to two
    /// decimals.
    ///
    /// # Errors
    /// Returns `ModelError::TickerWeightCountMismatch` before any arithmetic
    /// if the counts differ, and `ModelError::InsufficientData` with fewer
    /// than two observations.
    pub fn metrics(
        &self,
        table: &ReturnsTable,
        weights: &WeightVector,
    ) -> Result<PortfolioMetrics, ModelError> {
        let portfolio = self.portfolio_returns(table, weights)?;
        if portfolio.len() < 2 {
            return Err(ModelError::InsufficientData { required: 2, actual: portfolio.len() });
        }

        let daily_mean = mean(portfolio.view())?;
        let daily_std = sample_std(portfolio.view())?;

        Ok(PortfolioMetrics::new(
            round_to(annualize_return(daily_mean) * 100.0, PERCENT_DECIMALS),
            round_to(annualize_volatility(daily_std) * 100.0, PERCENT_DECIMALS),
        ))
    }
}

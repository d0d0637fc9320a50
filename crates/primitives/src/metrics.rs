//! Portfolio metric definitions.

use serde::{Deserialize, Serialize};

/// Annualized portfolio statistics, in percent, rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    /// Annualized mean return (%).
    pub annual_return_percent: f64,
    /// Annualized standard deviation of returns (%).
    pub annual_std_dev_percent: f64,
}

impl PortfolioMetrics {
    /// Create portfolio metrics.
    #[must_use]
    pub const fn new(annual_return_percent: f64, annual_std_dev_percent: f64) -> Self {
        Self { annual_return_percent, annual_std_dev_percent }
    }
}


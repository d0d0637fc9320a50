//! Analysis results and their renderings.

use std::{collections::HashSet, fmt};

use polars::prelude::*;
use portstat_primitives::{AlignedDateRange, CorrelationMatrix, PortfolioMetrics, Ticker};

const LABEL_COL: &str = "ticker";
const PORTFOLIO_LABEL: &str = "Portfolio";
const RETURN_HEADER: &str = "Annual Return (%)";
const STD_DEV_HEADER: &str = "Annual Standard Deviation (%)";

/// Result of a portfolio analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioReport {
    /// Common date coverage of every price series.
    pub range: AlignedDateRange,
    /// First and last dates whose prices entered the returns.
    pub computed: AlignedDateRange,
    /// Pairwise correlation of daily returns.
    pub correlation: CorrelationMatrix,
    /// Annualized portfolio statistics.
    pub metrics: PortfolioMetrics,
    /// Number of daily returns.
    pub observations: usize,
}

impl PortfolioReport {
    /// Correlation matrix as a frame: a `ticker` label column followed by
    /// one column per asset.
    ///
    /// # Errors
    /// Returns `PolarsError` if the frame cannot be constructed.
    pub fn correlation_frame(&self) -> PolarsResult<DataFrame> {
        let labels = unique_labels(self.correlation.tickers(), &[LABEL_COL]);

        let mut columns = Vec::with_capacity(labels.len() + 1);
        columns.push(Column::new(LABEL_COL.into(), labels.clone()));
        for (j, label) in labels.iter().enumerate() {
            let values: Vec<f64> = self.correlation.values().column(j).to_vec();
            columns.push(Column::new(label.as_str().into(), values));
        }
        DataFrame::new(columns)
    }

    /// Metrics as a single-row frame labeled `Portfolio`.
    ///
    /// # Errors
    /// Returns `PolarsError` if the frame cannot be constructed.
    pub fn metrics_frame(&self) -> PolarsResult<DataFrame> {
        df! {
            LABEL_COL => &[PORTFOLIO_LABEL],
            RETURN_HEADER => &[self.metrics.annual_return_percent],
            STD_DEV_HEADER => &[self.metrics.annual_std_dev_percent],
        }
    }
}

impl fmt::Display for PortfolioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Aligned date range: {}", self.range)?;
        writeln!(f, "Returns computed from {} ({} observations)", self.computed, self.observations)?;
        writeln!(f)?;

        writeln!(f, "Correlation Matrix")?;
        let labels: Vec<String> =
            self.correlation.tickers().iter().map(ToString::to_string).collect();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);
        let cell_width = label_width.max(7);

        write!(f, "{:label_width$}", "")?;
        for label in &labels {
            write!(f, "  {label:>cell_width$}")?;
        }
        writeln!(f)?;
        for (i, label) in labels.iter().enumerate() {
            write!(f, "{label:<label_width$}")?;
            for value in self.correlation.values().row(i) {
                write!(f, "  {value:>cell_width$.4}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "Portfolio Metrics")?;
        let name_width = PORTFOLIO_LABEL.len();
        writeln!(f, "{:name_width$}  {RETURN_HEADER}  {STD_DEV_HEADER}", "")?;
        write!(
            f,
            "{PORTFOLIO_LABEL}  {:>rw$.2}  {:>sw$.2}",
            self.metrics.annual_return_percent,
            self.metrics.annual_std_dev_percent,
            rw = RETURN_HEADER.len(),
            sw = STD_DEV_HEADER.len(),
        )
    }
}

/// Ticker labels made unique by appending the position to repeats.
fn unique_labels(tickers: &[Ticker], reserved: &[&str]) -> Vec<String> {
    let mut seen: HashSet<String> = reserved.iter().map(|s| (*s).to_string()).collect();
    tickers
        .iter()
        .enumerate()
        .map(|(i, ticker)| {
            let mut label = ticker.to_string();
            while seen.contains(&label) {
                label = format!("{label}_{i}");
            }
            seen.insert(label.clone());
            label
        })
        .collect()
}

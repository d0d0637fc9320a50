//! Daily simple returns over the aligned window.

use ndarray::Array2;
use polars::prelude::*;
use portstat_math::pct_change;
use portstat_primitives::{AlignedDateRange, EndBoundary, PriceSeries, ReturnsTable, Ticker};
use portstat_utils::{
    DATE_COL, extract_dates, extract_f64, inner_join_on_date, price_frame, window_filter,
};

use crate::ModelError;

/// Turns aligned price series into a returns table.
///
/// Series are restricted to the window, inner-joined on date, and converted
/// to `p[t] / p[t-1] - 1`. The first joined date has no prior price and is
/// dropped, so the table holds one row fewer than the common trading dates.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReturnsComputer {
    boundary: EndBoundary,
}

impl ReturnsComputer {
    /// Create a computer applying the window end under `boundary`.
    #[must_use]
    pub const fn new(boundary: EndBoundary) -> Self {
        Self { boundary }
    }

    /// How the window end is applied.
    #[must_use]
    pub const fn boundary(&self) -> EndBoundary {
        self.boundary
    }

    /// Compute daily returns of `series` inside `range`.
    ///
    /// # Errors
    /// Returns `ModelError::EmptyPortfolio` for no series and
    /// `ModelError::InsufficientData` with fewer than two common dates.
    pub fn compute(
        &self,
        series: &[PriceSeries],
        range: &AlignedDateRange,
    ) -> Result<ReturnsTable, ModelError> {
        self.compute_with_span(series, range).map(|(table, _)| table)
    }

    /// Like [`compute`](Self::compute), also returning the first and last
    /// dates whose prices entered the returns.
    ///
    /// # Errors
    /// Same as [`compute`](Self::compute).
    pub fn compute_with_span(
        &self,
        series: &[PriceSeries],
        range: &AlignedDateRange,
    ) -> Result<(ReturnsTable, AlignedDateRange), ModelError> {
        if series.is_empty() {
            return Err(ModelError::EmptyPortfolio);
        }

        // Positional names keep duplicate tickers in separate columns
        let columns: Vec<String> = (0..series.len()).map(|i| format!("c{i}")).collect();

        let frames = series
            .iter()
            .zip(&columns)
            .map(|(s, name)| {
                Ok(price_frame(s, name)?.lazy().filter(window_filter(range, self.boundary)))
            })
            .collect::<Result<Vec<_>, ModelError>>()?;

        let prices = inner_join_on_date(frames)?.collect()?;
        let common = prices.height();
        if common < 2 {
            return Err(ModelError::InsufficientData { required: 2, actual: common });
        }

        let price_dates = extract_dates(&prices)?;
        let (Some(&first), Some(&last)) = (price_dates.first(), price_dates.last()) else {
            return Err(ModelError::InsufficientData { required: 2, actual: 0 });
        };
        let span = AlignedDateRange::new(first, last);

        let mut exprs = vec![col(DATE_COL)];
        exprs.extend(columns.iter().map(|name| pct_change(name).alias(name.as_str())));
        let returns = prices.lazy().select(exprs).collect()?.slice(1, common - 1);

        let dates = extract_dates(&returns)?;
        let mut values = Array2::zeros((dates.len(), columns.len()));
        for (j, name) in columns.iter().enumerate() {
            for (i, r) in extract_f64(&returns, name)?.into_iter().enumerate() {
                values[[i, j]] = r;
            }
        }

        let tickers: Vec<Ticker> = series.iter().map(|s| s.ticker.clone()).collect();
        let table = ReturnsTable::try_new(tickers, dates, values)?;
        Ok((table, span))
    }
}

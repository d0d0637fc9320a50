//! Daily returns table definitions.

use ndarray::{Array2, ArrayView1};

use crate::{Date, Ticker};

/// Shape violations detected by [`ReturnsTable::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Row count does not match the date index.
    #[error("returns table has {rows} rows but {dates} dates")]
    RowCountMismatch {
        /// Rows in the value matrix.
        rows: usize,
        /// Entries in the date index.
        dates: usize,
    },

    /// Column count does not match the ticker list.
    #[error("returns table has {columns} columns but {tickers} tickers")]
    ColumnCountMismatch {
        /// Columns in the value matrix.
        columns: usize,
        /// Entries in the ticker list.
        tickers: usize,
    },

    /// Date index is not strictly ascending.
    #[error("returns table dates are not strictly ascending at row {0}")]
    UnorderedDates(usize),
}

/// Daily simple returns on a shared date index.
///
/// Rows are trading dates common to every ticker, columns are tickers in
/// portfolio order. Every column therefore has the same length and the same
/// dates.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnsTable {
    tickers: Vec<Ticker>,
    dates: Vec<Date>,
    values: Array2<f64>,
}

impl ReturnsTable {
    /// Create a returns table, checking its shape invariant.
    ///
    /// # Errors
    /// Returns `TableError` if the matrix does not match the index or the
    /// dates are not strictly ascending.
    pub fn try_new(
        tickers: Vec<Ticker>,
        dates: Vec<Date>,
        values: Array2<f64>,
    ) -> Result<Self, TableError> {
        let table = Self { tickers, dates, values };
        table.validate()?;
        Ok(table)
    }

    /// Check the shape invariant.
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.values.nrows() != self.dates.len() {
            return Err(TableError::RowCountMismatch {
                rows: self.values.nrows(),
                dates: self.dates.len(),
            });
        }
        if self.values.ncols() != self.tickers.len() {
            return Err(TableError::ColumnCountMismatch {
                columns: self.values.ncols(),
                tickers: self.tickers.len(),
            });
        }
        if let Some(i) = self.dates.windows(2).position(|w| w[0] >= w[1]) {
            return Err(TableError::UnorderedDates(i + 1));
        }
        Ok(())
    }

    /// Tickers in column order.
    #[must_use]
    pub fn tickers(&self) -> &[Ticker] {
        &self.tickers
    }

    /// Shared date index.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Return matrix (n_obs x n_assets).
    #[must_use]
    pub const fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Number of observations (rows).
    #[must_use]
    pub fn n_obs(&self) -> usize {
        self.values.nrows()
    }

    /// Number of assets (columns).
    #[must_use]
    pub fn n_assets(&self) -> usize {
        self.values.ncols()
    }

    /// Check if the table has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n_obs() == 0
    }

    /// Return series of the asset at column `i`.
    #[must_use]
    pub fn column(&self, i: usize) -> Option<ArrayView1<'_, f64>> {
        (i < self.n_assets()).then(|| self.values.column(i))
    }

    /// Return series of the first column labeled `ticker`.
    #[must_use]
    pub fn get(&self, ticker: &str) -> Option<ArrayView1<'_, f64>> {
        self.tickers.iter().position(|t| t.as_str() == ticker).map(|i| self.values.column(i))
    }

    /// Iterate over `(ticker, returns)` pairs in column order.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&Ticker, ArrayView1<'_, f64>)> {
        self.tickers.iter().zip(self.values.columns())
    }
}

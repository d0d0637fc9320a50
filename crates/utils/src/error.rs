//! Error types for utility functions.

/// Errors that can occur during utility operations.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Invalid parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Missing column.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// Unexpected null in a column that must be dense.
    #[error("null value in column {column} at row {row}")]
    NullValue {
        /// Column name.
        column: String,
        /// Row index.
        row: usize,
    },

    /// Date key outside the representable calendar.
    #[error("invalid date key: {0}")]
    InvalidDate(i32),
}

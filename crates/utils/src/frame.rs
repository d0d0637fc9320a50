//! Price frame construction and extraction.

use chrono::Datelike;
use polars::prelude::*;
use portstat_primitives::{Date, PriceSeries};

use crate::UtilsError;

/// Name of the date key column in every frame.
pub const DATE_COL: &str = "date";

/// Integer join key for a date (days from the common era).
#[must_use]
pub fn date_key(date: Date) -> i32 {
    date.num_days_from_ce()
}

/// Inverse of [`date_key`].
///
/// # Errors
/// Returns `UtilsError::InvalidDate` if the key is outside chrono's range.
pub fn date_from_key(key: i32) -> Result<Date, UtilsError> {
    Date::from_num_days_from_ce_opt(key).ok_or(UtilsError::InvalidDate(key))
}

/// Build a frame with | date | `value_col` | from a price series.
///
/// # Errors
/// Returns `UtilsError::Polars` if the frame cannot be constructed.
pub fn price_frame(series: &PriceSeries, value_col: &str) -> Result<DataFrame, UtilsError> {
    if value_col == DATE_COL {
        return Err(UtilsError::InvalidParameter(format!(
            "value column may not be named {DATE_COL}"
        )));
    }

    let days: Vec<i32> = series.points().iter().map(|p| date_key(p.date)).collect();
    let prices: Vec<f64> = series.points().iter().map(|p| p.adj_close).collect();

    let df = DataFrame::new(vec![
        Column::new(DATE_COL.into(), days),
        Column::new(value_col.into(), prices),
    ])?;
    Ok(df)
}

/// Read the date key column back into dates.
///
/// # Errors
/// Returns `UtilsError` if the column is missing, not integer keyed, or null.
pub fn extract_dates(df: &DataFrame) -> Result<Vec<Date>, UtilsError> {
    let keys = df.column(DATE_COL).map_err(|_| UtilsError::MissingColumn(DATE_COL.to_string()))?;
    keys.i32()?
        .into_iter()
        .enumerate()
        .map(|(row, key)| {
            let key = key
                .ok_or_else(|| UtilsError::NullValue { column: DATE_COL.to_string(), row })?;
            date_from_key(key)
        })
        .collect()
}

/// Read a dense float column into a vector.
///
/// # Errors
/// Returns `UtilsError` if the column is missing, not float typed, or null.
pub fn extract_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>, UtilsError> {
    let column = df.column(name).map_err(|_| UtilsError::MissingColumn(name.to_string()))?;
    column
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| UtilsError::NullValue { column: name.to_string(), row }))
        .collect()
}

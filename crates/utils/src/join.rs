//! Joining frames on shared trading dates.

use polars::prelude::*;

use crate::{DATE_COL, UtilsError};

/// Inner-join frames on the date column, sorted ascending by date.
///
/// Only dates present in every frame survive. Non-key column names must be
/// unique across frames.
///
/// # Errors
/// Returns `UtilsError::InvalidParameter` if `frames` is empty.
pub fn inner_join_on_date(frames: Vec<LazyFrame>) -> Result<LazyFrame, UtilsError> {
    let mut frames = frames.into_iter();
    let first = frames
        .next()
        .ok_or_else(|| UtilsError::InvalidParameter("no frames to join".to_string()))?;

    let joined = frames.fold(first, |acc, lf| {
        acc.join(lf, [col(DATE_COL)], [col(DATE_COL)], JoinArgs::new(JoinType::Inner))
    });

    Ok(joined.sort([DATE_COL], SortMultipleOptions::default()))
}

//! Date window filtering.

use polars::prelude::*;
use portstat_primitives::{AlignedDateRange, EndBoundary};

use crate::{DATE_COL, date_key};

/// Predicate keeping rows whose date lies inside `range`.
///
/// The start is always inclusive; the end follows `boundary`.
///
/// # Returns
/// Polars expression usable with `LazyFrame::filter`.
pub fn window_filter(range: &AlignedDateRange, boundary: EndBoundary) -> Expr {
    let start = col(DATE_COL).gt_eq(lit(date_key(range.start)));
    let end = match boundary {
        EndBoundary::Exclusive => col(DATE_COL).lt(lit(date_key(range.end))),
        EndBoundary::Inclusive => col(DATE_COL).lt_eq(lit(date_key(range.end))),
    };
    start.and(end)
}

//! Intersection of per-ticker date coverage.

use portstat_primitives::{AlignedDateRange, PriceSeries};
use portstat_traits::SourceError;

use crate::ModelError;

/// Computes the date window every series covers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRangeAligner;

impl DateRangeAligner {
    /// Create a new aligner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Latest first date and earliest last date across `series`.
    ///
    /// # Errors
    /// Returns `ModelError::EmptyPortfolio` for no series,
    /// `ModelError::DataUnavailable` if any series is empty, and
    /// `ModelError::EmptyAlignedRange` if the coverage does not overlap.
    pub fn align(&self, series: &[PriceSeries]) -> Result<AlignedDateRange, ModelError> {
        let mut bounds = None;

        for s in series {
            let (Some(first), Some(last)) = (s.first_date(), s.last_date()) else {
                return Err(ModelError::DataUnavailable {
                    ticker: s.ticker.clone(),
                    source: SourceError::NoData(s.ticker.to_string()),
                });
            };
            bounds = Some(match bounds {
                None => (first, last),
                Some((start, end)) => (first.max(start), last.min(end)),
            });
        }

        let (start, end) = bounds.ok_or(ModelError::EmptyPortfolio)?;
        let range = AlignedDateRange::new(start, end);
        if range.is_empty() {
            return Err(ModelError::EmptyAlignedRange { start, end });
        }
        Ok(range)
    }
}

//! Daily price series and date window definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Date, Ticker};

/// How the end date of a window is applied when restricting data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndBoundary {
    /// Observations on the end date are excluded (range-query convention).
    #[default]
    Exclusive,
    /// Observations on the end date are included.
    Inclusive,
}

impl fmt::Display for EndBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exclusive => write!(f, "exclusive"),
            Self::Inclusive => write!(f, "inclusive"),
        }
    }
}

/// Common date window across a set of price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlignedDateRange {
    /// Latest first observation date across all series.
    pub start: Date,
    /// Earliest last observation date across all series.
    pub end: Date,
}

impl AlignedDateRange {
    /// Create a new date range.
    #[must_use]
    pub const fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Returns true when no common window exists (`start > end`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Check whether `date` falls inside the window under `boundary`.
    #[must_use]
    pub fn contains(&self, date: Date, boundary: EndBoundary) -> bool {
        if date < self.start {
            return false;
        }
        match boundary {
            EndBoundary::Exclusive => date < self.end,
            EndBoundary::Inclusive => date <= self.end,
        }
    }

    /// Start date as `YYYY-MM-DD`.
    #[must_use]
    pub fn start_iso(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// End date as `YYYY-MM-DD`.
    #[must_use]
    pub fn end_iso(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for AlignedDateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start_iso(), self.end_iso())
    }
}

/// A single daily observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date.
    pub date: Date,
    /// Adjusted close price.
    pub adj_close: f64,
}

impl PricePoint {
    /// Create a new price point.
    #[must_use]
    pub const fn new(date: Date, adj_close: f64) -> Self {
        Self { date, adj_close }
    }
}

/// Daily adjusted close history for one ticker, ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Ticker the series belongs to.
    pub ticker: Ticker,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Create a series, sorting by date.
    ///
    /// When a date appears more than once the last observation wins.
    #[must_use]
    pub fn new(ticker: Ticker, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);

        let mut deduped: Vec<PricePoint> = Vec::with_capacity(points.len());
        for point in points {
            match deduped.last_mut() {
                Some(last) if last.date == point.date => *last = point,
                _ => deduped.push(point),
            }
        }

        Self { ticker, points: deduped }
    }

    /// Create an empty series.
    #[must_use]
    pub const fn empty(ticker: Ticker) -> Self {
        Self { ticker, points: Vec::new() }
    }

    /// Observations in ascending date order.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of observations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest observation date.
    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.points.first().map(|p| p.date)
    }

    /// Latest observation date.
    #[must_use]
    pub fn last_date(&self) -> Option<Date> {
        self.points.last().map(|p| p.date)
    }

    /// Restrict the series to `range` under `boundary`.
    #[must_use]
    pub fn window(&self, range: &AlignedDateRange, boundary: EndBoundary) -> Self {
        let points =
            self.points.iter().filter(|p| range.contains(p.date, boundary)).copied().collect();
        Self { ticker: self.ticker.clone(), points }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample_series() -> PriceSeries {
        PriceSeries::new(
            Ticker::new("A"),
            vec![
                PricePoint::new(d(2024, 1, 3), 102.0),
                PricePoint::new(d(2024, 1, 1), 100.0),
                PricePoint::new(d(2024, 1, 2), 101.0),
                PricePoint::new(d(2024, 1, 4), 103.0),
            ],
        )
    }

    #[test]
    fn series_sorted_on_construction() {
        let series = sample_series();
        let dates: Vec<Date> = series.points().iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![d(2024, 1, 1), d(2024, 1, 2), d(2024, 1, 3), d(2024, 1, 4)]);
        assert_eq!(series.first_date(), Some(d(2024, 1, 1)));
        assert_eq!(series.last_date(), Some(d(2024, 1, 4)));
    }

    #[test]
    fn duplicate_dates_keep_last() {
        let series = PriceSeries::new(
            Ticker::new("A"),
            vec![PricePoint::new(d(2024, 1, 1), 100.0), PricePoint::new(d(2024, 1, 1), 105.0)],
        );
        assert_eq!(series.len(), 1);
        assert_eq!(series.points()[0].adj_close, 105.0);
    }

    #[rstest]
    #[case(EndBoundary::Exclusive, 2)]
    #[case(EndBoundary::Inclusive, 3)]
    fn window_honors_boundary(#[case] boundary: EndBoundary, #[case] expected: usize) {
        let range = AlignedDateRange::new(d(2024, 1, 2), d(2024, 1, 4));
        let windowed = sample_series().window(&range, boundary);
        assert_eq!(windowed.len(), expected);
        assert_eq!(windowed.first_date(), Some(d(2024, 1, 2)));
    }

    #[test]
    fn range_empty_and_display() {
        let range = AlignedDateRange::new(d(2024, 3, 1), d(2024, 2, 1));
        assert!(range.is_empty());

        let range = AlignedDateRange::new(d(2010, 6, 29), d(2024, 2, 1));
        assert!(!range.is_empty());
        assert_eq!(range.to_string(), "2010-06-29 to 2024-02-01");
        assert_eq!(range.start_iso(), "2010-06-29");
    }

    #[test]
    fn empty_series_has_no_dates() {
        let series = PriceSeries::empty(Ticker::new("X"));
        assert!(series.is_empty());
        assert_eq!(series.first_date(), None);
    }
}

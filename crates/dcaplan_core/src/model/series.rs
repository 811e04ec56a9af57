//! Daily closing price series.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::date_math::{Month, months_through};
use crate::error::SeriesError;

/// A single daily close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: Date,
    pub close: f64,
}

/// An ordered, date-indexed series of daily closes.
///
/// Dates are unique and strictly increasing; gaps are expected on non-trading
/// days (weekends, holidays) and no point is invented for them. The series is
/// immutable once constructed and is borrowed read-only by every engine
/// component, so it can be shared freely across parallel window computations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Validate and take ownership of a sorted point list.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, SeriesError> {
        if points.is_empty() {
            return Err(SeriesError::Empty);
        }
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(SeriesError::UnorderedDate(pair[1].date));
            }
        }
        if let Some(p) = points.iter().find(|p| p.close <= 0.0) {
            return Err(SeriesError::NonPositiveClose {
                date: p.date,
                close: p.close,
            });
        }
        Ok(Self { points })
    }

    /// Build a series from (date, close) pairs.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (Date, f64)>,
    ) -> Result<Self, SeriesError> {
        Self::new(
            pairs
                .into_iter()
                .map(|(date, close)| PricePoint { date, close })
                .collect(),
        )
    }

    /// All points, ascending by date.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of tradable dates in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false after construction, which rejects empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First tradable date. Always present: construction rejects empty input.
    #[must_use]
    pub fn first_date(&self) -> Date {
        self.points[0].date
    }

    /// Last tradable date.
    #[must_use]
    pub fn last_date(&self) -> Date {
        self.points[self.points.len() - 1].date
    }

    /// Tradable points within one calendar month, ascending by date.
    ///
    /// Empty when the month has no tradable dates in the series.
    #[must_use]
    pub fn month_points(&self, month: Month) -> &[PricePoint] {
        let start = self.points.partition_point(|p| p.date < month.first_day());
        let end = self.points.partition_point(|p| p.date <= month.last_day());
        &self.points[start..end]
    }

    /// Last close at or before `date`, if any.
    #[must_use]
    pub fn close_at_or_before(&self, date: Date) -> Option<&PricePoint> {
        let idx = self.points.partition_point(|p| p.date <= date);
        idx.checked_sub(1).map(|i| &self.points[i])
    }

    /// Calendar months spanned by the series, first through last inclusive.
    ///
    /// Includes months that happen to contain no tradable dates; use
    /// [`Self::month_points`] to distinguish them.
    pub fn months(&self) -> impl Iterator<Item = Month> {
        months_through(
            Month::from_date(self.first_date()),
            Month::from_date(self.last_date()),
        )
    }
}

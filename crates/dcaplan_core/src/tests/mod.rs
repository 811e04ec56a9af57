//! Integration tests for the dcaplan simulation engine
//!
//! Tests are organized by topic:
//! - `resolution` - nominal-day resolution policy
//! - `plans` - single-plan simulation
//! - `comparison` - multi-day comparison over a shared range
//! - `windows` - rolling-window aggregation
//! - `monthly` - per-month close extremes
//! - `analysis` - distribution summaries
//! - `seams` - provider and report sink collaborators
//!
//! All fixtures are synthetic with hand-computed expectations; none attempt
//! to reproduce any particular historical index.

mod resolution;

use jiff::civil::Date;

use crate::model::{NominalDay, PricePoint, PriceSeries};

/// Build a series from (year, month, day, close) tuples.
pub(crate) fn series(points: &[(i16, i8, i8, f64)]) -> PriceSeries {
    PriceSeries::new(
        points
            .iter()
            .map(|&(y, m, d, close)| PricePoint {
                date: jiff::civil::date(y, m, d),
                close,
            })
            .collect(),
    )
    .unwrap()
}

/// Every calendar day in `[start, end]` is tradable; the close on the i-th
/// day overall is `close(i)`.
pub(crate) fn daily_range(
    start: Date,
    end: Date,
    close: impl Fn(usize) -> f64,
) -> PriceSeries {
    let mut points = Vec::new();
    let mut date = start;
    let mut i = 0;
    while date <= end {
        points.push(PricePoint {
            date,
            close: close(i),
        });
        date = date.tomorrow().unwrap();
        i += 1;
    }
    PriceSeries::new(points).unwrap()
}

pub(crate) fn day(d: u8) -> NominalDay {
    NominalDay::new(d).unwrap()
}

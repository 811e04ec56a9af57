//! Rolling-window aggregation of day comparisons.
//!
//! Each window is an independent computation over the shared immutable
//! series, so the batch variant fans windows out across the rayon pool and
//! re-sorts by start date to keep the chronological order the lazy variant
//! guarantees for free.

use jiff::civil::Date;

use crate::compare::compare;
use crate::date_math::add_months;
use crate::error::CompareError;
use crate::model::{NominalDay, PriceSeries, WindowSample};

/// Every `(start, end)` window of `window_months` calendar months that fits
/// within the series' date span, rolled forward one month at a time from the
/// series' first date.
fn window_bounds(
    series: &PriceSeries,
    window_months: u32,
) -> impl Iterator<Item = (Date, Date)> {
    let first = series.first_date();
    let last = series.last_date();
    (0i32..)
        .map(move |i| {
            let start = add_months(first, i);
            (start, add_months(start, window_months as i32))
        })
        .take_while(move |(_, end)| *end <= last)
}

/// Lazily aggregate one [`WindowSample`] per rolling window, in chronological
/// start-date order.
///
/// The iterator is finite and restartable (call again for a fresh pass) and
/// callers may stop consuming at any point without forcing the remaining
/// windows. A failing window surfaces as an `Err` in place; windows are never
/// silently skipped, since dropping them would corrupt any distribution built
/// from the samples.
pub fn aggregate<'a>(
    days: &'a [NominalDay],
    window_months: u32,
    contribution: f64,
    series: &'a PriceSeries,
) -> impl Iterator<Item = Result<WindowSample, CompareError>> + 'a {
    window_bounds(series, window_months).map(move |(start_date, end_date)| {
        let comparison = compare(days, start_date, end_date, contribution, series)?;
        Ok(WindowSample {
            start_date,
            end_date,
            comparison,
        })
    })
}

/// Aggregate every window across the rayon pool, failing on the first
/// erroring window. Results are re-sorted by window start date since parallel
/// completion order differs.
#[cfg(feature = "parallel")]
pub fn aggregate_par(
    days: &[NominalDay],
    window_months: u32,
    contribution: f64,
    series: &PriceSeries,
) -> Result<Vec<WindowSample>, CompareError> {
    use rayon::iter::{IntoParallelIterator, ParallelIterator};
    use tracing::debug;

    let bounds: Vec<(Date, Date)> = window_bounds(series, window_months).collect();
    debug!(windows = bounds.len(), "aggregating windows in parallel");

    let mut samples = bounds
        .into_par_iter()
        .map(|(start_date, end_date)| {
            let comparison = compare(days, start_date, end_date, contribution, series)?;
            Ok(WindowSample {
                start_date,
                end_date,
                comparison,
            })
        })
        .collect::<Result<Vec<_>, CompareError>>()?;

    samples.sort_by_key(|sample| sample.start_date);
    Ok(samples)
}

//! Per-month close extremes.

use crate::model::{MonthlyExtreme, PriceSeries};

/// One [`MonthlyExtreme`] per calendar month with at least one tradable day,
/// in chronological order.
///
/// This captures raw intra-month volatility, independent of any simulated
/// purchases; it contextualizes how much of a window's best/worst-day spread
/// is explained by within-month price movement alone. Months the series spans
/// but contains no points for (data gaps) are skipped here, unlike in the
/// simulation path where they are errors.
pub fn analyze_months(series: &PriceSeries) -> impl Iterator<Item = MonthlyExtreme> {
    series.months().filter_map(move |month| {
        let points = series.month_points(month);
        let first = points.first()?;

        let mut cheapest = first.close;
        let mut most_expensive = first.close;
        for point in &points[1..] {
            cheapest = cheapest.min(point.close);
            most_expensive = most_expensive.max(point.close);
        }

        Some(MonthlyExtreme {
            month,
            cheapest_close: cheapest,
            most_expensive_close: most_expensive,
            spread_percent: (most_expensive - cheapest) / cheapest * 100.0,
        })
    })
}

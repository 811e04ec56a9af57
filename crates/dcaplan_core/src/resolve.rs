//! Nominal-day resolution.
//!
//! Maps an intended day-of-month onto an actual tradable date within one
//! calendar month. The edge policy is asymmetric on purpose: search forward
//! within the month, and when the nominal day falls after the month's last
//! tradable date, clamp to that last date — never roll into the next month.
//! Changing either half of the policy materially changes results at month
//! boundaries.

use crate::date_math::Month;
use crate::error::ResolveError;
use crate::model::{NominalDay, PriceSeries, ResolvedPurchase};

/// Resolve `day` to a tradable date inside `month`.
///
/// Exact calendar-day match wins; otherwise the earliest tradable date after
/// `day`; otherwise the month's last tradable date. The result is never
/// outside `month`. Fails when the month has no tradable dates at all.
pub fn resolve_purchase_day(
    day: NominalDay,
    month: Month,
    series: &PriceSeries,
) -> Result<ResolvedPurchase, ResolveError> {
    let points = series.month_points(month);
    let last = points.last().ok_or(ResolveError::NoTradableDays(month))?;

    // First tradable date at or after the nominal day covers both the exact
    // match and the next-available case; the clamp is the fallback.
    let point = points
        .iter()
        .find(|p| p.date.day() >= day.get() as i8)
        .unwrap_or(last);

    Ok(ResolvedPurchase {
        nominal_day: day,
        actual_date: point.date,
        close: point.close,
    })
}

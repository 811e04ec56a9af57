//! Recurring purchase plan simulation.

use tracing::debug;

use crate::date_math::{Month, months_through};
use crate::error::SimulateError;
use crate::model::{Plan, PlanResult, PriceSeries};
use crate::resolve::resolve_purchase_day;

/// Simulate a recurring fixed-contribution plan over `plan`'s date range.
///
/// Every calendar month overlapping `[start_date, end_date]` gets one
/// resolved purchase of `contribution / close` fractional units. Months whose
/// resolved date lands outside the range are skipped, so the clamp-to-last-day
/// rule can never buy outside the requested window. The final value prices
/// all accumulated units at the last close at or before the end date.
///
/// A month with no tradable dates anywhere in the range is a data gap and
/// aborts the whole simulation with the offending month identified.
pub fn simulate(plan: &Plan, series: &PriceSeries) -> Result<PlanResult, SimulateError> {
    let mut purchases = Vec::new();
    let mut total_units = 0.0;

    let first = Month::from_date(plan.start_date);
    let last = Month::from_date(plan.end_date);

    for month in months_through(first, last) {
        let purchase = resolve_purchase_day(plan.nominal_day, month, series)?;
        if purchase.actual_date < plan.start_date || purchase.actual_date > plan.end_date {
            continue;
        }
        total_units += plan.contribution / purchase.close;
        purchases.push(purchase);
    }

    let closing = series
        .close_at_or_before(plan.end_date)
        .ok_or(SimulateError::NoClosingPriceAtOrBeforeEndDate(plan.end_date))?;

    debug!(
        day = %plan.nominal_day,
        months = purchases.len(),
        units = total_units,
        "plan simulated"
    );

    Ok(PlanResult {
        nominal_day: plan.nominal_day,
        total_contributed: plan.contribution * purchases.len() as f64,
        total_units,
        final_value: total_units * closing.close,
        purchases,
    })
}

//! Multi-day comparison over a shared date range.

use jiff::civil::Date;

use crate::error::CompareError;
use crate::model::{ComparisonResult, NominalDay, Plan, PlanResult, PriceSeries};
use crate::simulation::simulate;

/// Simulate one plan per nominal day over a shared range and rank the
/// outcomes.
///
/// Best is the highest final value, worst the lowest; ties go to the smaller
/// nominal day so results are reproducible regardless of input order. Plans
/// that executed zero purchases are excluded from the ranking — a plan that
/// never bought has no comparable outcome. Fewer than two ranked plans is
/// [`CompareError::InsufficientData`].
pub fn compare(
    days: &[NominalDay],
    start_date: Date,
    end_date: Date,
    contribution: f64,
    series: &PriceSeries,
) -> Result<ComparisonResult, CompareError> {
    if days.is_empty() {
        return Err(CompareError::EmptyDaySet);
    }

    let mut executed: Vec<PlanResult> = Vec::with_capacity(days.len());
    for &nominal_day in days {
        let plan = Plan {
            nominal_day,
            start_date,
            end_date,
            contribution,
        };
        let result = simulate(&plan, series)?;
        if result.months_purchased() > 0 {
            executed.push(result);
        }
    }

    if executed.len() < 2 {
        return Err(CompareError::InsufficientData {
            executed: executed.len(),
        });
    }

    let mut best = &executed[0];
    let mut worst = &executed[0];
    for result in &executed[1..] {
        if result.final_value > best.final_value
            || (result.final_value == best.final_value && result.nominal_day < best.nominal_day)
        {
            best = result;
        }
        if result.final_value < worst.final_value
            || (result.final_value == worst.final_value && result.nominal_day < worst.nominal_day)
        {
            worst = result;
        }
    }

    // Executed plans always hold units bought at positive closes, so the
    // worst value is strictly positive and the spread is well defined.
    let spread_percent = (best.final_value - worst.final_value) / worst.final_value * 100.0;

    Ok(ComparisonResult {
        best_day: best.nominal_day,
        worst_day: worst.nominal_day,
        best_value: best.final_value,
        worst_value: worst.final_value,
        spread_percent,
    })
}

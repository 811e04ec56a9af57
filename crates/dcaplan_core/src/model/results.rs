//! Engine output types.
//!
//! All of these are plain values computed from an immutable [`PriceSeries`];
//! none of them hold references back into the series, so they can be moved
//! across threads or serialized as-is.
//!
//! [`PriceSeries`]: super::PriceSeries

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::NominalDay;
use crate::date_math::Month;

/// One executed purchase: the nominal day it came from, the tradable date it
/// resolved to, and the close paid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPurchase {
    pub nominal_day: NominalDay,
    pub actual_date: Date,
    pub close: f64,
}

/// Complete result of simulating a single recurring plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub nominal_day: NominalDay,
    /// Contribution × number of months actually purchased.
    pub total_contributed: f64,
    /// Fractional units accumulated across all purchases.
    pub total_units: f64,
    /// Units valued at the last close at or before the plan's end date.
    pub final_value: f64,
    /// Every purchase, in chronological order.
    pub purchases: Vec<ResolvedPurchase>,
}

impl PlanResult {
    /// Number of months in which a purchase was executed.
    #[must_use]
    pub fn months_purchased(&self) -> usize {
        self.purchases.len()
    }
}

/// Best and worst nominal day over one shared date range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub best_day: NominalDay,
    pub worst_day: NominalDay,
    pub best_value: f64,
    pub worst_value: f64,
    /// (best − worst) / worst × 100. Never negative.
    pub spread_percent: f64,
}

/// A [`ComparisonResult`] tagged with the window that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSample {
    pub start_date: Date,
    pub end_date: Date,
    pub comparison: ComparisonResult,
}

/// Cheapest and most expensive close within one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyExtreme {
    pub month: Month,
    pub cheapest_close: f64,
    pub most_expensive_close: f64,
    /// (max − min) / min × 100. Zero for single-day or constant months.
    pub spread_percent: f64,
}

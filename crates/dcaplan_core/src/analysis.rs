//! Summary statistics over collected results.
//!
//! The engine produces per-window and per-day values; this module reduces
//! them into the figures a report actually shows — how often each day won,
//! how wide the best/worst spread runs, and the per-day final values for a
//! single range.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::SimulateError;
use crate::model::{NominalDay, Plan, PriceSeries, WindowSample};
use crate::simulation::simulate;

/// Percentiles reported for spread distributions.
pub const STANDARD_PERCENTILES: [f64; 3] = [0.05, 0.50, 0.95];

/// Final value per nominal day over one shared range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySweepSummary {
    pub start_date: Date,
    pub end_date: Date,
    /// (nominal day, final value), ascending by day. Days whose plan never
    /// purchased report a value of zero.
    pub final_values: Vec<(NominalDay, f64)>,
}

/// Simulate every day in `days` over one range and collect final values.
pub fn sweep_days(
    days: &[NominalDay],
    start_date: Date,
    end_date: Date,
    contribution: f64,
    series: &PriceSeries,
) -> Result<DaySweepSummary, SimulateError> {
    let mut final_values = Vec::with_capacity(days.len());
    for &nominal_day in days {
        let plan = Plan {
            nominal_day,
            start_date,
            end_date,
            contribution,
        };
        let result = simulate(&plan, series)?;
        final_values.push((nominal_day, result.final_value));
    }
    final_values.sort_by_key(|(day, _)| *day);

    Ok(DaySweepSummary {
        start_date,
        end_date,
        final_values,
    })
}

/// Distribution of best-day/worst-day/spread outcomes across window samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadDistribution {
    pub num_windows: usize,
    pub min_spread: f64,
    pub max_spread: f64,
    pub mean_spread: f64,
    /// Spread percentiles as (percentile, value) pairs, one per entry in
    /// [`STANDARD_PERCENTILES`].
    pub percentile_values: Vec<(f64, f64)>,
    /// Windows won by each nominal day.
    pub best_day_counts: BTreeMap<NominalDay, usize>,
    /// Windows lost by each nominal day.
    pub worst_day_counts: BTreeMap<NominalDay, usize>,
}

impl SpreadDistribution {
    /// Reduce collected samples into a distribution. `None` when empty.
    #[must_use]
    pub fn from_samples(samples: &[WindowSample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut spreads: Vec<f64> = samples
            .iter()
            .map(|s| s.comparison.spread_percent)
            .collect();
        spreads.sort_unstable_by(f64::total_cmp);

        let mut best_day_counts: BTreeMap<NominalDay, usize> = BTreeMap::new();
        let mut worst_day_counts: BTreeMap<NominalDay, usize> = BTreeMap::new();
        for sample in samples {
            *best_day_counts
                .entry(sample.comparison.best_day)
                .or_default() += 1;
            *worst_day_counts
                .entry(sample.comparison.worst_day)
                .or_default() += 1;
        }

        let percentile_values = STANDARD_PERCENTILES
            .iter()
            .map(|&p| (p, percentile(&spreads, p)))
            .collect();

        Some(Self {
            num_windows: samples.len(),
            min_spread: spreads[0],
            max_spread: spreads[spreads.len() - 1],
            mean_spread: spreads.iter().sum::<f64>() / spreads.len() as f64,
            percentile_values,
            best_day_counts,
            worst_day_counts,
        })
    }

    /// Look up a percentile value computed by [`Self::from_samples`].
    #[must_use]
    pub fn percentile_value(&self, target: f64) -> Option<f64> {
        self.percentile_values
            .iter()
            .find(|(p, _)| (*p - target).abs() < 0.001)
            .map(|(_, v)| *v)
    }
}

/// Nearest-rank percentile on a non-empty sorted slice.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

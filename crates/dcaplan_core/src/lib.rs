//! Dollar-cost-averaging day-of-month simulation engine.
//!
//! Given a historical daily close series, this crate answers one question:
//! how much does the calendar day you pick for a recurring monthly purchase
//! change the final value of the position?
//!
//! - Nominal days (1–31) resolve to tradable dates under a fixed policy:
//!   exact match, else the next tradable day within the month, else the
//!   month's last tradable day (never rolling into the next month).
//! - A recurring fixed-amount plan is simulated per nominal day over a range.
//! - Comparisons run across all days and across rolling windows to build a
//!   distribution of best/worst-day spreads, contextualized by raw per-month
//!   close extremes.
//!
//! All computation is deterministic and side-effect free over an immutable,
//! shared [`model::PriceSeries`]. Data loading and rendering live behind the
//! [`provider::PriceProvider`] and [`report::ReportSink`] seams; the engine
//! owns no wire format and no output format.

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod compare;
pub mod date_math;
pub mod error;
pub mod monthly;
pub mod provider;
pub mod report;
pub mod resolve;
pub mod simulation;
pub mod windows;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use model::{
    ComparisonResult, MonthlyExtreme, NominalDay, Plan, PlanResult, PricePoint,
    PriceSeries, ResolvedPurchase, WindowSample,
};

//! Rendering seam.
//!
//! The engine produces values; how they are displayed is an embedder concern.
//! A sink receives finished results and owes the engine nothing back, so the
//! core stays free of any output format.

use crate::model::{ComparisonResult, MonthlyExtreme, WindowSample};

/// Destination for finished analysis results.
pub trait ReportSink {
    /// A single multi-day comparison over one range.
    fn comparison(&mut self, result: &ComparisonResult);

    /// Samples from a rolling-window aggregation, in chronological order.
    fn window_samples(&mut self, samples: &[WindowSample]);

    /// Per-month close extremes, in chronological order.
    fn monthly_extremes(&mut self, extremes: &[MonthlyExtreme]);
}

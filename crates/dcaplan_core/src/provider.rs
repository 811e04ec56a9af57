//! Price data acquisition seam.
//!
//! The engine never fetches data itself; an embedder supplies a provider.
//! Retry and backoff policy, if any, lives behind the implementation — the
//! engine surfaces [`ProviderError::DataUnavailable`] as-is.
//!
//! [`ProviderError::DataUnavailable`]: crate::error::ProviderError::DataUnavailable

use jiff::civil::Date;

use crate::error::ProviderError;
use crate::model::{PricePoint, PriceSeries};

/// Source of historical daily closes.
pub trait PriceProvider {
    /// Fetch daily closes for `symbol` covering `[start, end]`.
    fn fetch(&self, symbol: &str, start: Date, end: Date)
    -> Result<PriceSeries, ProviderError>;
}

/// Provider backed by a single pre-loaded series, restricted per fetch.
///
/// Useful for tests and for embedders that load a full history up front and
/// carve ranges out of it.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    symbol: String,
    series: PriceSeries,
}

impl StaticProvider {
    pub fn new(symbol: impl Into<String>, series: PriceSeries) -> Self {
        Self {
            symbol: symbol.into(),
            series,
        }
    }
}

impl PriceProvider for StaticProvider {
    fn fetch(
        &self,
        symbol: &str,
        start: Date,
        end: Date,
    ) -> Result<PriceSeries, ProviderError> {
        let unavailable = || ProviderError::DataUnavailable {
            symbol: symbol.to_string(),
            start,
            end,
        };

        if symbol != self.symbol {
            return Err(unavailable());
        }

        let points: Vec<PricePoint> = self
            .series
            .points()
            .iter()
            .copied()
            .filter(|p| p.date >= start && p.date <= end)
            .collect();
        if points.is_empty() {
            return Err(unavailable());
        }

        Ok(PriceSeries::new(points)?)
    }
}

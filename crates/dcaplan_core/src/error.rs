use std::fmt;

use jiff::civil::Date;

use crate::date_math::Month;

/// Errors related to price series construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesError {
    /// A series must contain at least one price point
    Empty,
    /// Dates must be unique and strictly increasing
    UnorderedDate(Date),
    /// Closing prices must be strictly positive
    NonPositiveClose { date: Date, close: f64 },
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesError::Empty => write!(f, "price series is empty"),
            SeriesError::UnorderedDate(date) => {
                write!(f, "price series dates not strictly increasing at {date}")
            }
            SeriesError::NonPositiveClose { date, close } => {
                write!(f, "non-positive close {close} at {date}")
            }
        }
    }
}

impl std::error::Error for SeriesError {}

/// Errors related to nominal-day resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// The month has no tradable dates in the series — a data gap
    NoTradableDays(Month),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NoTradableDays(month) => {
                write!(f, "no tradable days in {month}")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Errors related to simulating a single plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulateError {
    /// A month inside the plan range has no tradable dates
    NoTradableDays(Month),
    /// The series has no close at or before the plan's end date
    NoClosingPriceAtOrBeforeEndDate(Date),
}

impl fmt::Display for SimulateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulateError::NoTradableDays(month) => {
                write!(f, "no tradable days in {month}")
            }
            SimulateError::NoClosingPriceAtOrBeforeEndDate(date) => {
                write!(f, "no closing price at or before end date {date}")
            }
        }
    }
}

impl std::error::Error for SimulateError {}

impl From<ResolveError> for SimulateError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NoTradableDays(month) => SimulateError::NoTradableDays(month),
        }
    }
}

/// Errors related to multi-day comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareError {
    /// The nominal day set was empty
    EmptyDaySet,
    /// Fewer than two plans executed at least one purchase
    InsufficientData { executed: usize },
    Simulate(SimulateError),
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareError::EmptyDaySet => write!(f, "nominal day set is empty"),
            CompareError::InsufficientData { executed } => {
                write!(
                    f,
                    "only {executed} plan(s) executed a purchase, need at least 2 to compare"
                )
            }
            CompareError::Simulate(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CompareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompareError::Simulate(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SimulateError> for CompareError {
    fn from(err: SimulateError) -> Self {
        CompareError::Simulate(err)
    }
}

/// Errors related to external price data acquisition
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// The provider has no data for the requested symbol/range
    DataUnavailable {
        symbol: String,
        start: Date,
        end: Date,
    },
    /// The provider returned data that does not form a valid series
    InvalidSeries(SeriesError),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::DataUnavailable { symbol, start, end } => {
                write!(f, "no price data for {symbol} in {start}..={end}")
            }
            ProviderError::InvalidSeries(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::InvalidSeries(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SeriesError> for ProviderError {
    fn from(err: SeriesError) -> Self {
        ProviderError::InvalidSeries(err)
    }
}

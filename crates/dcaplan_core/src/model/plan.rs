//! Plan configuration types.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A user-intended day-of-month in [1, 31], independent of any month.
///
/// Whether the day is actually tradable in a given month is decided later by
/// the resolution policy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NominalDay(u8);

impl NominalDay {
    /// Every nominal day, 1 through 31 — the full sweep a comparison runs.
    pub const ALL: [NominalDay; 31] = {
        let mut days = [NominalDay(1); 31];
        let mut i = 0;
        while i < 31 {
            days[i] = NominalDay(i as u8 + 1);
            i += 1;
        }
        days
    };

    /// Create a nominal day. Returns `None` outside [1, 31].
    #[must_use]
    pub const fn new(day: u8) -> Option<Self> {
        if matches!(day, 1..=31) {
            Some(Self(day))
        } else {
            None
        }
    }

    /// The day-of-month value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for NominalDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Configuration for one recurring purchase plan. Immutable input to the
/// simulator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Intended day-of-month for each purchase.
    pub nominal_day: NominalDay,
    /// Inclusive start of the simulated range.
    pub start_date: Date,
    /// Inclusive end of the simulated range; also the valuation date.
    pub end_date: Date,
    /// Fixed amount contributed per purchased month.
    pub contribution: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_day_bounds() {
        assert!(NominalDay::new(0).is_none());
        assert!(NominalDay::new(32).is_none());
        assert_eq!(NominalDay::new(1).unwrap().get(), 1);
        assert_eq!(NominalDay::new(31).unwrap().get(), 31);
    }

    #[test]
    fn test_all_covers_every_day_in_order() {
        assert_eq!(NominalDay::ALL.len(), 31);
        for (i, day) in NominalDay::ALL.iter().enumerate() {
            assert_eq!(day.get() as usize, i + 1);
        }
    }
}

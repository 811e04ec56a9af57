//! Calendar helpers for month-granular simulation stepping.
//!
//! jiff `Span` arithmetic is correct but heavier than needed inside the
//! simulation loops, which only ever step whole calendar months and clamp a
//! day-of-month. The helpers here do direct calendar arithmetic instead — no
//! `Span` allocation or normalisation involved.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Fast leap year check.
#[inline]
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Fast inline days-in-month calculation without creating a `jiff::civil::Date`.
#[inline]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    const DAYS: [i8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// A calendar month (year + month), the granularity the simulation steps at.
///
/// Orders chronologically via the derived lexicographic (year, month) order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Month {
    pub year: i16,
    pub month: i8,
}

impl Month {
    /// Create a month. `month` must be in [1, 12].
    #[must_use]
    pub fn new(year: i16, month: i8) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { year, month }
    }

    /// The calendar month containing `date`.
    #[must_use]
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First calendar day of the month.
    #[must_use]
    pub fn first_day(self) -> Date {
        jiff::civil::date(self.year, self.month, 1)
    }

    /// Last calendar day of the month.
    #[must_use]
    pub fn last_day(self) -> Date {
        jiff::civil::date(self.year, self.month, days_in_month(self.year, self.month))
    }

    /// The following calendar month.
    #[must_use]
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// Whether `date` falls inside this month.
    #[must_use]
    pub fn contains(self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Add `n` calendar months to a date, clamping the day-of-month to the target
/// month's length (2025-01-31 + 1 month = 2025-02-28).
#[inline]
pub fn add_months(d: Date, n: i32) -> Date {
    let total = i32::from(d.year()) * 12 + i32::from(d.month()) - 1 + n;
    let year = total.div_euclid(12) as i16;
    let month = (total.rem_euclid(12) + 1) as i8;
    let day = d.day().min(days_in_month(year, month));
    jiff::civil::date(year, month, day)
}

/// Iterator over calendar months from `from` through `to`, inclusive.
///
/// Empty when `from > to`.
pub fn months_through(from: Month, to: Month) -> impl Iterator<Item = Month> {
    let mut cur = Some(from).filter(|m| *m <= to);
    std::iter::from_fn(move || {
        let m = cur?;
        cur = Some(m.next()).filter(|n| *n <= to);
        Some(m)
    })
}

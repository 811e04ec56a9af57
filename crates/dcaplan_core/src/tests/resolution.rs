//! Tests for the nominal-day resolution policy
//!
//! The policy has three cases and exactly one must apply per resolution:
//! exact calendar-day match, next tradable day within the month, or clamp to
//! the month's last tradable day. Resolution never leaves the month.

use jiff::civil::date;

use super::{day, series};
use crate::date_math::Month;
use crate::error::ResolveError;
use crate::resolve::resolve_purchase_day;

/// A 31-day month with trading on the 1st, 2nd, 3rd and 28th only.
fn sparse_january() -> crate::model::PriceSeries {
    series(&[
        (2021, 1, 1, 100.0),
        (2021, 1, 2, 101.0),
        (2021, 1, 3, 102.0),
        (2021, 1, 28, 103.0),
    ])
}

#[test]
fn test_exact_match() {
    let s = sparse_january();
    let month = Month::new(2021, 1);

    let resolved = resolve_purchase_day(day(1), month, &s).unwrap();
    assert_eq!(resolved.actual_date, date(2021, 1, 1));
    assert_eq!(resolved.close, 100.0);
    assert_eq!(resolved.nominal_day, day(1));
}

#[test]
fn test_next_available_day() {
    let s = sparse_january();
    let month = Month::new(2021, 1);

    // Nothing trades on the 4th; the next tradable day is the 28th.
    let resolved = resolve_purchase_day(day(4), month, &s).unwrap();
    assert_eq!(resolved.actual_date, date(2021, 1, 28));
    assert_eq!(resolved.close, 103.0);
}

#[test]
fn test_clamp_to_last_tradable_day() {
    let s = sparse_january();
    let month = Month::new(2021, 1);

    // The 31st falls after the last tradable day; clamp, never roll over.
    let resolved = resolve_purchase_day(day(31), month, &s).unwrap();
    assert_eq!(resolved.actual_date, date(2021, 1, 28));
}

#[test]
fn test_trichotomy_exactly_one_case_holds() {
    let s = sparse_january();
    let month = Month::new(2021, 1);
    let tradable_days: Vec<i8> = s
        .month_points(month)
        .iter()
        .map(|p| p.date.day())
        .collect();
    let max_day = *tradable_days.iter().max().unwrap();

    for d in 1..=31u8 {
        let resolved = resolve_purchase_day(day(d), month, &s).unwrap();
        let actual = resolved.actual_date.day();

        let exact = actual == d as i8;
        let next_available = actual > d as i8
            && tradable_days.contains(&actual)
            && tradable_days
                .iter()
                .all(|&t| t <= d as i8 || t >= actual);
        let clamped = tradable_days.iter().all(|&t| t < d as i8) && actual == max_day;

        let cases = [exact, next_available, clamped];
        assert_eq!(
            cases.iter().filter(|&&c| c).count(),
            1,
            "nominal day {d} resolved to {actual}: cases {cases:?}"
        );
    }
}

#[test]
fn test_never_resolves_outside_month() {
    let s = series(&[
        (2021, 1, 4, 10.0),
        (2021, 1, 15, 11.0),
        (2021, 2, 1, 12.0),
        (2021, 2, 26, 13.0),
    ]);

    for (year, month) in [(2021, 1), (2021, 2)] {
        let m = Month::new(year, month);
        for d in 1..=31u8 {
            let resolved = resolve_purchase_day(day(d), m, &s).unwrap();
            assert!(
                m.contains(resolved.actual_date),
                "day {d} resolved outside {m}: {}",
                resolved.actual_date
            );
        }
    }
}

#[test]
fn test_no_tradable_days_is_an_error() {
    let s = sparse_january();
    let month = Month::new(2021, 2);

    let err = resolve_purchase_day(day(1), month, &s).unwrap_err();
    assert_eq!(err, ResolveError::NoTradableDays(month));
}

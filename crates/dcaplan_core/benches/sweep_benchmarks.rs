//! Criterion benchmarks for dcaplan_core
//!
//! Run with: cargo bench -p dcaplan_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use dcaplan_core::compare::compare;
use dcaplan_core::model::{NominalDay, PricePoint, PriceSeries};
use dcaplan_core::windows::aggregate;
use jiff::civil::{Weekday, date};

/// Weekday-only closes over `years` years with a deterministic wobble.
fn synthetic_series(years: i16) -> PriceSeries {
    let mut points = Vec::new();
    let mut d = date(2000, 1, 3);
    let end = date(2000 + years, 1, 3);
    let mut i = 0usize;
    while d <= end {
        if !matches!(d.weekday(), Weekday::Saturday | Weekday::Sunday) {
            let close = 100.0 + (i as f64 * 0.37).sin() * 5.0 + i as f64 * 0.01;
            points.push(PricePoint { date: d, close });
            i += 1;
        }
        d = d.tomorrow().unwrap();
    }
    PriceSeries::new(points).unwrap()
}

fn bench_full_day_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_day_sweep");

    for years in [5i16, 20] {
        let series = synthetic_series(years);
        group.bench_with_input(BenchmarkId::from_parameter(years), &series, |b, series| {
            b.iter(|| {
                compare(
                    black_box(&NominalDay::ALL),
                    series.first_date(),
                    series.last_date(),
                    100.0,
                    series,
                )
                .unwrap()
            });
        });
    }

    group.finish();
}

fn bench_window_aggregation(c: &mut Criterion) {
    let series = synthetic_series(20);
    let days: Vec<NominalDay> = NominalDay::ALL.to_vec();

    c.bench_function("rolling_windows_10y", |b| {
        b.iter(|| {
            aggregate(black_box(&days), 120, 100.0, &series)
                .collect::<Result<Vec<_>, _>>()
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_full_day_sweep, bench_window_aggregation);
criterion_main!(benches);

//! Performance benchmarks for the earnings tracker.
//!
//! This benchmark suite verifies that the calculation engine keeps a
//! one-second tick cadence comfortable:
//! - Night overlap computation: < 1μs mean
//! - Single weekday breakdown: < 5μs mean
//! - Full period aggregation: < 100μs mean
//! - One engine tick (live view + both periods): < 500μs mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use std::str::FromStr;

use paywatch::calculation::{
    aggregate_period, calculate_weekday_breakdown, night_overlap_hours,
};
use paywatch::config::{
    CompensationConfig, DeductionConfig, PremiumConfig, SalaryConfig, ScheduleConfig,
};
use paywatch::engine::PayrollTracker;
use paywatch::models::{Period, WeekendShiftEntry};
use paywatch::storage::MemoryStore;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn bench_config() -> CompensationConfig {
    CompensationConfig {
        salary: SalaryConfig {
            monthly: dec("35200"),
            working_days_per_month: dec("22"),
            standard_hours_per_day: dec("8"),
            de_minimis_allowance: dec("2000"),
        },
        premiums: PremiumConfig {
            night_differential_rate: dec("0.10"),
            overtime_multiplier: dec("1.25"),
            rest_day_multiplier: dec("1.30"),
            rest_day_excess_multiplier: dec("1.69"),
        },
        schedule: ScheduleConfig {
            shift_start_hour: 22,
            shift_end_hour: 8,
            scheduled_paid_hours: dec("9"),
            unpaid_break_hours: dec("1"),
            grace_period_minutes: 15,
        },
        deductions: DeductionConfig {
            withholding_tax_rate: dec("0.15"),
            annual_tax_exemption: dec("250000"),
            social_insurance_rate: dec("0.05"),
            health_insurance_rate: dec("0.025"),
            health_contribution_floor: dec("250"),
            health_contribution_cap: dec("2500"),
            housing_fund_rate: dec("0.02"),
            housing_contribution_cap: dec("200"),
        },
    }
}

fn datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Benchmark: night overlap computation across representative starts.
fn bench_night_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("night_overlap");
    for (label, hour) in [("window_open", 22), ("daytime", 10), ("early_morning", 1)] {
        let start = NaiveTime::from_hms_opt(hour, 0, 0).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(label), &start, |b, start| {
            b.iter(|| night_overlap_hours(black_box(dec("9.5")), black_box(*start)))
        });
    }
    group.finish();
}

/// Benchmark: single weekday breakdown including overtime split.
fn bench_weekday_breakdown(c: &mut Criterion) {
    let config = bench_config();
    c.bench_function("weekday_breakdown", |b| {
        b.iter(|| calculate_weekday_breakdown(black_box(dec("9.75")), &config))
    });
}

/// Benchmark: full period aggregation with a populated month.
fn bench_period_aggregation(c: &mut Criterion) {
    let config = bench_config();

    let mut recorded = std::collections::BTreeMap::new();
    for day in ["03", "04", "05", "06", "07", "10", "11"] {
        recorded.insert(date(&format!("2026-08-{day}")), dec("1960.00"));
    }

    let mut weekend = std::collections::BTreeMap::new();
    for day in ["01", "08"] {
        weekend.insert(
            date(&format!("2026-08-{day}")),
            WeekendShiftEntry::new(dec("8"), NaiveTime::from_hms_opt(22, 0, 0).unwrap())
                .unwrap(),
        );
    }

    c.bench_function("period_aggregation", |b| {
        b.iter(|| {
            aggregate_period(
                black_box(Period::First),
                black_box(date("2026-08-06")),
                &recorded,
                &weekend,
                &config,
            )
        })
    });
}

/// Benchmark: one full engine tick, the per-second hot path.
fn bench_engine_tick(c: &mut Criterion) {
    let mut tracker = PayrollTracker::new(bench_config(), MemoryStore::new());
    let now = datetime("2026-08-04 03:00:00");
    tracker.tick(now);

    c.bench_function("engine_tick", |b| {
        b.iter(|| tracker.tick(black_box(now)))
    });
}

criterion_group!(
    benches,
    bench_night_overlap,
    bench_weekday_breakdown,
    bench_period_aggregation,
    bench_engine_tick
);
criterion_main!(benches);

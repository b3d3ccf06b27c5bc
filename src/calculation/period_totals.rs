//! Semi-monthly period aggregation.
//!
//! Folds per-day earnings across a pay period: recorded weekday totals
//! where they exist, projections where they do not, derived weekend
//! earnings where an entry exists, then the de minimis allowance (first
//! period only) and the semi-monthly statutory deductions.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::CompensationConfig;
use crate::models::{DayCell, PayPeriod, Period, PeriodView, WeekendShiftEntry};

use super::deductions::semi_monthly_deductions;
use super::night_differential::NIGHT_HOURS_CAP;
use super::rest_day::weekend_earnings;
use super::shift_window::{is_rest_day, weekday_count};

/// Projected earnings for a weekday with no recorded shift.
///
/// The fixed semi-monthly salary is spread evenly across the period's
/// weekdays, and a full scheduled shift's night differential is assumed
/// on top. A degenerate period with no weekdays projects only the night
/// component rather than dividing by zero.
pub fn weekday_projection(weekdays_in_period: u32, config: &CompensationConfig) -> Decimal {
    let salary_share = if weekdays_in_period == 0 {
        Decimal::ZERO
    } else {
        config.semi_monthly_salary() / Decimal::from(weekdays_in_period)
    };

    let night_hours = config.schedule.scheduled_paid_hours.min(NIGHT_HOURS_CAP);
    let night_share =
        config.hourly_rate() * config.premiums.night_differential_rate * night_hours;

    salary_share + night_share
}

/// Aggregates one pay period of the month containing `today`.
///
/// Per date: a weekend date contributes its derived entry earnings (zero
/// without an entry); a weekday contributes its recorded total when one
/// exists, otherwise the projection. The first period additionally
/// receives the full monthly de minimis allowance. The net total is the
/// gross minus the semi-monthly statutory deductions.
pub fn aggregate_period(
    period: Period,
    today: NaiveDate,
    recorded: &BTreeMap<NaiveDate, Decimal>,
    weekend_entries: &BTreeMap<NaiveDate, WeekendShiftEntry>,
    config: &CompensationConfig,
) -> PeriodView {
    let pay_period = PayPeriod::for_date(period, today);
    let weekdays = weekday_count(pay_period.start_date, pay_period.end_date);
    let projection = weekday_projection(weekdays, config);

    let mut days = Vec::with_capacity(16);
    let mut gross = Decimal::ZERO;

    for date in pay_period.dates() {
        let is_weekend = is_rest_day(date);

        let (earnings, is_recorded_weekend) = if is_weekend {
            match weekend_entries.get(&date) {
                Some(entry) => (weekend_earnings(entry, config).total, true),
                None => (Decimal::ZERO, false),
            }
        } else {
            match recorded.get(&date) {
                Some(total) => (*total, false),
                None => (projection, false),
            }
        };

        gross += earnings;
        days.push(DayCell {
            date,
            earnings,
            is_weekend,
            is_today: date == today,
            is_recorded_weekend,
        });
    }

    if period == Period::First {
        gross += config.salary.de_minimis_allowance;
    }

    let period_net_total = gross - semi_monthly_deductions(config).total;

    PeriodView {
        title: pay_period.title(),
        days,
        period_gross: gross,
        period_net_total,
    }
}

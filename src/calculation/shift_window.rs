//! Shift window derivation and calendar utilities.
//!
//! The work schedule is a fixed nightly window (22:00 through 08:00 the
//! next day by default). This module derives the window anchoring any
//! instant, classifies dates as working days or rest days, and provides
//! the inclusive weekday count used to spread the semi-monthly salary.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ScheduleConfig;

/// Classifies a calendar date for rate selection.
///
/// Saturday and Sunday are rest days and attract the higher rest-day
/// multipliers; Monday through Friday are ordinary working days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Friday.
    Weekday,
    /// Saturday or Sunday.
    RestDay,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Weekday => write!(f, "Weekday"),
            DayKind::RestDay => write!(f, "Rest day"),
        }
    }
}

/// Returns the [`DayKind`] for a date.
pub fn day_kind(date: NaiveDate) -> DayKind {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => DayKind::RestDay,
        _ => DayKind::Weekday,
    }
}

/// Returns `true` when the date is a Saturday or Sunday.
pub fn is_rest_day(date: NaiveDate) -> bool {
    day_kind(date) == DayKind::RestDay
}

/// Derives the shift window start anchoring an instant.
///
/// Instants at or after the scheduled end hour belong to the window
/// opening at the shift start hour of the same calendar day (which may
/// still be in the future); earlier instants belong to the window that
/// opened the previous evening. Total function, no failure mode.
///
/// # Example
///
/// ```
/// use chrono::NaiveDateTime;
/// use paywatch::calculation::shift_window_start;
/// use paywatch::config::ScheduleConfig;
/// use rust_decimal::Decimal;
///
/// let schedule = ScheduleConfig {
///     shift_start_hour: 22,
///     shift_end_hour: 8,
///     scheduled_paid_hours: Decimal::from(9),
///     unpaid_break_hours: Decimal::ONE,
///     grace_period_minutes: 15,
/// };
///
/// // 02:30 still belongs to the window that opened the evening before.
/// let night = NaiveDateTime::parse_from_str("2026-08-04 02:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(
///     shift_window_start(night, &schedule).to_string(),
///     "2026-08-03 22:00:00"
/// );
///
/// // 09:00 already anchors to the upcoming window of the same day.
/// let morning = NaiveDateTime::parse_from_str("2026-08-04 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(
///     shift_window_start(morning, &schedule).to_string(),
///     "2026-08-04 22:00:00"
/// );
/// ```
pub fn shift_window_start(instant: NaiveDateTime, schedule: &ScheduleConfig) -> NaiveDateTime {
    let day = if instant.hour() >= schedule.shift_end_hour {
        instant.date()
    } else {
        instant
            .date()
            .pred_opt()
            .expect("previous calendar day is representable")
    };

    day.and_hms_opt(schedule.shift_start_hour, 0, 0)
        .expect("shift start hour is validated to 0-23")
}

/// Hours elapsed between the window start and `now`, clamped at zero.
///
/// Minutes are counted with [`chrono::TimeDelta::num_minutes`] and
/// converted to decimal hours. An instant before the window start (the
/// window has not opened yet) yields zero rather than a negative value.
pub fn elapsed_hours(now: NaiveDateTime, window_start: NaiveDateTime) -> Decimal {
    let minutes = (now - window_start).num_minutes().max(0);
    Decimal::from(minutes) / Decimal::from(60)
}

/// Paid hours elapsed: elapsed time minus the unpaid break, clamped at
/// zero.
pub fn paid_elapsed_hours(
    now: NaiveDateTime,
    window_start: NaiveDateTime,
    schedule: &ScheduleConfig,
) -> Decimal {
    (elapsed_hours(now, window_start) - schedule.unpaid_break_hours).max(Decimal::ZERO)
}

/// Counts the Monday-Friday dates in the inclusive range `[start, end]`.
///
/// Used both for spreading the semi-monthly salary across a period and
/// for classifying shift dates. An inverted range counts as zero.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use paywatch::calculation::weekday_count;
///
/// // August 2026 opens on a Saturday.
/// let start = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 8, 15).unwrap();
/// assert_eq!(weekday_count(start, end), 10);
/// ```
pub fn weekday_count(start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| !is_rest_day(*d))
        .count() as u32
}

//! Night differential overlap computation.
//!
//! Hours worked between 22:00 and 06:00 attract the night shift
//! differential (Labor Code Art. 86). This module computes how many of a
//! shift's hours fall inside that window, handling shifts that start
//! before midnight, span midnight, or start in the early morning.

use chrono::{NaiveTime, Timelike};
use rust_decimal::Decimal;

/// Night hours credited per shift are capped at one full standard shift.
///
/// The differential is defined over the regular eight-hour base, not over
/// overtime, so a longer shift still earns at most eight night hours.
pub const NIGHT_HOURS_CAP: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Minute of day the night window opens (22:00).
const NIGHT_START_MINUTE: i64 = 22 * 60;

/// Minute of day the night window closes (06:00).
const NIGHT_END_MINUTE: i64 = 6 * 60;

/// Minutes in a day.
const DAY_MINUTES: i64 = 24 * 60;

/// Computes the hours of a shift that overlap the 22:00-06:00 night
/// window, capped at [`NIGHT_HOURS_CAP`].
///
/// The worked interval `[start, start + hours)` is laid out in minutes on
/// a timeline starting at midnight of the shift's first day. The night
/// window contributes up to three segments on that timeline: the early
/// morning of the first day (00:00-06:00), the evening of the first day
/// into the second (22:00-06:00), and the evening of the second day for
/// shifts running that long. Each segment is clipped to the worked
/// interval and the clipped minutes are summed.
///
/// Negative `hours` are treated as zero. The function assumes shifts of
/// at most 24 hours; callers validate that bound at the input boundary.
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use paywatch::calculation::night_overlap_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let ten_pm = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
///
/// // A shift starting at 22:00 is immediately inside the window.
/// assert_eq!(
///     night_overlap_hours(Decimal::from_str("5").unwrap(), ten_pm),
///     Decimal::from_str("5").unwrap()
/// );
///
/// // Ten hours from 22:00 covers the whole window but is capped at 8.
/// assert_eq!(
///     night_overlap_hours(Decimal::from_str("10").unwrap(), ten_pm),
///     Decimal::from_str("8").unwrap()
/// );
/// ```
pub fn night_overlap_hours(hours: Decimal, start_time: NaiveTime) -> Decimal {
    if hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let start_minute =
        Decimal::from(i64::from(start_time.hour()) * 60 + i64::from(start_time.minute()));
    let end_minute = start_minute + hours * Decimal::from(60);

    // Night window segments on the two-day timeline, in minutes.
    let segments = [
        (Decimal::ZERO, Decimal::from(NIGHT_END_MINUTE)),
        (
            Decimal::from(NIGHT_START_MINUTE),
            Decimal::from(DAY_MINUTES + NIGHT_END_MINUTE),
        ),
        (
            Decimal::from(DAY_MINUTES + NIGHT_START_MINUTE),
            Decimal::from(2 * DAY_MINUTES + NIGHT_END_MINUTE),
        ),
    ];

    let overlap_minutes: Decimal = segments
        .iter()
        .map(|(lo, hi)| (end_minute.min(*hi) - start_minute.max(*lo)).max(Decimal::ZERO))
        .sum();

    (overlap_minutes / Decimal::from(60)).min(NIGHT_HOURS_CAP)
}

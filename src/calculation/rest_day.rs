//! Rest-day pay calculation.
//!
//! Work on a Saturday or Sunday is paid at 130% of the hourly rate for
//! the first standard-shift hours and 169% beyond them (Labor Code
//! Art. 93; the excess multiplier is 130% of the 130% rate, so no
//! separate overtime tier applies on rest days). Night hours additionally
//! earn the night differential.

use rust_decimal::Decimal;

use crate::config::CompensationConfig;
use crate::models::{EarningsBreakdown, WeekendShiftEntry};

use super::night_differential::night_overlap_hours;
use chrono::NaiveTime;

/// Computes the earnings breakdown for rest-day work.
///
/// The first `standard_hours_per_day` hours are paid at the rest-day
/// multiplier; the remainder at the rest-day excess multiplier. Night
/// overlap is computed from the actual start time and paid on top at the
/// night differential rate. Non-positive hours yield a zero breakdown.
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveTime;
/// use paywatch::calculation::calculate_rest_day_breakdown;
/// use paywatch::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let config = ConfigLoader::load("config/paywatch").unwrap().into_config();
/// let breakdown = calculate_rest_day_breakdown(
///     Decimal::from(8),
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
///     &config,
/// );
/// assert_eq!(breakdown.total, breakdown.base_amount + breakdown.night_amount);
/// ```
pub fn calculate_rest_day_breakdown(
    hours: Decimal,
    start_time: NaiveTime,
    config: &CompensationConfig,
) -> EarningsBreakdown {
    if hours <= Decimal::ZERO {
        return EarningsBreakdown::zero();
    }

    let hourly_rate = config.hourly_rate();
    let standard_hours = config.salary.standard_hours_per_day;

    let base_hours = hours.min(standard_hours);
    let excess_hours = (hours - standard_hours).max(Decimal::ZERO);

    let base_amount = hourly_rate * config.premiums.rest_day_multiplier * base_hours;
    let excess_amount = hourly_rate * config.premiums.rest_day_excess_multiplier * excess_hours;

    let night_hours = night_overlap_hours(hours, start_time);
    let night_amount = hourly_rate * config.premiums.night_differential_rate * night_hours;

    EarningsBreakdown {
        base_hours,
        overtime_hours: excess_hours,
        night_hours,
        base_amount,
        overtime_amount: excess_amount,
        night_amount,
        total: base_amount + excess_amount + night_amount,
    }
}

/// Derives the earnings for a manually recorded weekend shift.
pub fn weekend_earnings(
    entry: &WeekendShiftEntry,
    config: &CompensationConfig,
) -> EarningsBreakdown {
    calculate_rest_day_breakdown(entry.hours_worked, entry.start_time, config)
}

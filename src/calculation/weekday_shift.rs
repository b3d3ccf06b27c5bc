//! Weekday shift breakdown calculation.
//!
//! An ordinary working-day shift is paid at the plain hourly rate up to
//! the scheduled paid hours plus the grace period; paid time beyond that
//! threshold accrues overtime at the overtime multiplier (Labor Code
//! Art. 87). Night hours earn the differential on top. The same function
//! serves the live per-tick view and the frozen final breakdown.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::config::CompensationConfig;
use crate::models::EarningsBreakdown;

use super::night_differential::night_overlap_hours;

/// Computes the earnings breakdown for a weekday shift from its paid
/// elapsed hours.
///
/// Base hours are clamped against the overtime threshold (scheduled paid
/// hours plus grace), so no overtime accrues until the grace period is
/// exhausted. Night overlap is measured from the scheduled window start.
/// Non-positive paid time yields a zero breakdown.
///
/// # Example
///
/// ```no_run
/// use paywatch::calculation::calculate_weekday_breakdown;
/// use paywatch::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = ConfigLoader::load("config/paywatch").unwrap().into_config();
///
/// // Exactly the scheduled paid hours: no overtime yet.
/// let breakdown = calculate_weekday_breakdown(Decimal::from(9), &config);
/// assert_eq!(breakdown.overtime_hours, Decimal::ZERO);
/// ```
pub fn calculate_weekday_breakdown(
    paid_elapsed_hours: Decimal,
    config: &CompensationConfig,
) -> EarningsBreakdown {
    let paid = paid_elapsed_hours.max(Decimal::ZERO);
    if paid == Decimal::ZERO {
        return EarningsBreakdown::zero();
    }

    let hourly_rate = config.hourly_rate();
    let threshold = config.paid_hours_threshold();

    let base_hours = paid.min(threshold);
    let overtime_hours = (paid - threshold).max(Decimal::ZERO);

    let window_open = NaiveTime::from_hms_opt(config.schedule.shift_start_hour, 0, 0)
        .expect("shift start hour is validated to 0-23");
    let night_hours = night_overlap_hours(paid, window_open);

    let base_amount = hourly_rate * base_hours;
    let overtime_amount = hourly_rate * config.premiums.overtime_multiplier * overtime_hours;
    let night_amount = hourly_rate * config.premiums.night_differential_rate * night_hours;

    EarningsBreakdown {
        base_hours,
        overtime_hours,
        night_hours,
        base_amount,
        overtime_amount,
        night_amount,
        total: base_amount + overtime_amount + night_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        DeductionConfig, PremiumConfig, SalaryConfig, ScheduleConfig,
    };
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_config() -> CompensationConfig {
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

    // ==========================================================================
    // Full scheduled shift, ended at exactly 9h paid.
    // base = 200 x 9 = 1800, night = 200 x 0.10 x 8 = 160, no overtime.
    // ==========================================================================
    #[test]
    fn test_full_shift_at_scheduled_hours_has_no_overtime() {
        let config = create_test_config();
        let breakdown = calculate_weekday_breakdown(dec("9"), &config);

        assert_eq!(breakdown.base_hours, dec("9"));
        assert_eq!(breakdown.overtime_hours, Decimal::ZERO);
        assert_eq!(breakdown.night_hours, dec("8"));
        assert_eq!(breakdown.base_amount, dec("1800"));
        assert_eq!(breakdown.night_amount, dec("160.00"));
        assert_eq!(breakdown.total, dec("1960.00"));
    }

    #[test]
    fn test_no_overtime_within_grace_period() {
        let config = create_test_config();
        let breakdown = calculate_weekday_breakdown(dec("9.25"), &config);

        // The grace period absorbs the extra quarter hour into base pay.
        assert_eq!(breakdown.base_hours, dec("9.25"));
        assert_eq!(breakdown.overtime_hours, Decimal::ZERO);
        assert_eq!(breakdown.base_amount, dec("1850.00"));
    }

    #[test]
    fn test_overtime_accrues_past_grace_period() {
        let config = create_test_config();
        let breakdown = calculate_weekday_breakdown(dec("9.5"), &config);

        assert_eq!(breakdown.base_hours, dec("9.25"));
        assert_eq!(breakdown.overtime_hours, dec("0.25"));
        // 200 x 1.25 x 0.25 = 62.50
        assert_eq!(breakdown.overtime_amount, dec("62.50"));
        assert_eq!(breakdown.total, dec("1850.00") + dec("62.50") + dec("160.00"));
    }

    #[test]
    fn test_partial_shift_early_in_the_night() {
        let config = create_test_config();
        let breakdown = calculate_weekday_breakdown(dec("3"), &config);

        assert_eq!(breakdown.base_hours, dec("3"));
        assert_eq!(breakdown.night_hours, dec("3"));
        assert_eq!(breakdown.overtime_hours, Decimal::ZERO);
        // 200 x 3 + 200 x 0.10 x 3 = 660
        assert_eq!(breakdown.total, dec("660.00"));
    }

    #[test]
    fn test_night_hours_cap_at_eight_during_overtime() {
        let config = create_test_config();
        let breakdown = calculate_weekday_breakdown(dec("11"), &config);

        assert_eq!(breakdown.night_hours, dec("8"));
        assert_eq!(breakdown.overtime_hours, dec("1.75"));
    }

    #[test]
    fn test_zero_and_negative_paid_time_yield_zero() {
        let config = create_test_config();
        assert_eq!(
            calculate_weekday_breakdown(Decimal::ZERO, &config),
            EarningsBreakdown::zero()
        );
        assert_eq!(
            calculate_weekday_breakdown(dec("-2"), &config),
            EarningsBreakdown::zero()
        );
    }
}

//! Configuration types for the compensation package.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. The loaded
//! [`CompensationConfig`] is immutable and is passed explicitly into every
//! calculation; nothing in the engine reads ambient configuration state.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Salary figures for the tracked position.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryConfig {
    /// The fixed monthly base salary.
    pub monthly: Decimal,
    /// The number of working days per month used to derive the hourly rate.
    pub working_days_per_month: Decimal,
    /// The number of standard hours per working day.
    pub standard_hours_per_day: Decimal,
    /// The monthly de minimis allowance, paid in full with the first period.
    pub de_minimis_allowance: Decimal,
}

/// Premium multipliers applied on top of the base hourly rate.
#[derive(Debug, Clone, Deserialize)]
pub struct PremiumConfig {
    /// Night shift differential rate for hours between 22:00 and 06:00
    /// (Labor Code Art. 86).
    pub night_differential_rate: Decimal,
    /// Overtime multiplier on ordinary working days (Labor Code Art. 87).
    pub overtime_multiplier: Decimal,
    /// Base multiplier for the first eight hours worked on a rest day
    /// (Labor Code Art. 93).
    pub rest_day_multiplier: Decimal,
    /// Multiplier for rest-day hours beyond eight (130% of the 130% rate).
    pub rest_day_excess_multiplier: Decimal,
}

/// The fixed night-shift schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// The local hour at which every shift window opens.
    pub shift_start_hour: u32,
    /// The local hour at which the scheduled shift window closes next day.
    pub shift_end_hour: u32,
    /// Paid hours in a scheduled shift (window length minus the unpaid break).
    pub scheduled_paid_hours: Decimal,
    /// Unpaid break hours deducted from elapsed time.
    pub unpaid_break_hours: Decimal,
    /// Minutes tolerated past the scheduled paid hours before overtime accrues.
    pub grace_period_minutes: i64,
}

/// Statutory deduction parameters.
///
/// Contribution amounts are estimated from the monthly salary; the
/// withholding tax is estimated on an annual basis and prorated over the
/// 24 semi-monthly pay periods of the year.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionConfig {
    /// Withholding tax rate applied to annual income above the exemption.
    pub withholding_tax_rate: Decimal,
    /// Annual income exempt from withholding tax.
    pub annual_tax_exemption: Decimal,
    /// Social insurance (SSS) employee share of monthly salary.
    pub social_insurance_rate: Decimal,
    /// Health insurance (PhilHealth) employee share of monthly salary.
    pub health_insurance_rate: Decimal,
    /// Minimum monthly health insurance contribution.
    pub health_contribution_floor: Decimal,
    /// Maximum monthly health insurance contribution.
    pub health_contribution_cap: Decimal,
    /// Housing fund (Pag-IBIG) employee share of monthly salary.
    pub housing_fund_rate: Decimal,
    /// Maximum monthly housing fund contribution.
    pub housing_contribution_cap: Decimal,
}

/// The complete compensation configuration loaded from YAML.
///
/// # Example
///
/// ```no_run
/// use paywatch::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("config/paywatch").unwrap();
/// let config = loader.config();
/// println!("Hourly rate: {}", config.hourly_rate());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CompensationConfig {
    /// Salary figures.
    pub salary: SalaryConfig,
    /// Premium multipliers.
    pub premiums: PremiumConfig,
    /// The fixed shift schedule.
    pub schedule: ScheduleConfig,
    /// Statutory deduction parameters.
    pub deductions: DeductionConfig,
}

impl CompensationConfig {
    /// Derives the base hourly rate: monthly salary divided by
    /// (working days per month x standard hours per day).
    pub fn hourly_rate(&self) -> Decimal {
        self.salary.monthly
            / (self.salary.working_days_per_month * self.salary.standard_hours_per_day)
    }

    /// Half of the monthly base salary, the fixed pay for one semi-monthly
    /// period.
    pub fn semi_monthly_salary(&self) -> Decimal {
        self.salary.monthly / Decimal::TWO
    }

    /// The grace period expressed in hours.
    pub fn grace_period_hours(&self) -> Decimal {
        Decimal::from(self.schedule.grace_period_minutes) / Decimal::from(60)
    }

    /// Paid hours after which overtime begins to accrue: the scheduled
    /// paid hours plus the grace period.
    pub fn paid_hours_threshold(&self) -> Decimal {
        self.schedule.scheduled_paid_hours + self.grace_period_hours()
    }
}

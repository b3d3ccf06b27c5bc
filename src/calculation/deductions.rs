//! Statutory deduction estimation.
//!
//! Withholding tax is estimated on an annual basis (rate applied to the
//! income above the exemption) and prorated over the 24 semi-monthly pay
//! periods of the year. The SSS, PhilHealth, and Pag-IBIG contributions
//! are monthly amounts halved for semi-monthly application. The two
//! shapes are deliberately kept distinct rather than folded into one
//! formula.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CompensationConfig;

/// Semi-monthly pay periods in a year.
const SEMI_MONTHLY_PERIODS_PER_YEAR: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Months in a year.
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The statutory deductions withheld from one semi-monthly pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// Withholding tax share (annual estimate over 24 periods).
    pub withholding_tax: Decimal,
    /// Social insurance (SSS) share.
    pub social_insurance: Decimal,
    /// Health insurance (PhilHealth) share.
    pub health_insurance: Decimal,
    /// Housing fund (Pag-IBIG) share.
    pub housing_fund: Decimal,
    /// Sum of all shares.
    pub total: Decimal,
}

/// Estimates the annual withholding tax for the configured salary.
///
/// The configured rate applies to the portion of annual income above the
/// exemption; income at or below the exemption owes nothing.
pub fn annual_withholding_tax(config: &CompensationConfig) -> Decimal {
    let annual_salary = config.salary.monthly * MONTHS_PER_YEAR;
    let taxable = (annual_salary - config.deductions.annual_tax_exemption).max(Decimal::ZERO);
    taxable * config.deductions.withholding_tax_rate
}

/// The monthly social insurance contribution.
pub fn monthly_social_insurance(config: &CompensationConfig) -> Decimal {
    config.salary.monthly * config.deductions.social_insurance_rate
}

/// The monthly health insurance contribution, floored and capped.
pub fn monthly_health_insurance(config: &CompensationConfig) -> Decimal {
    (config.salary.monthly * config.deductions.health_insurance_rate)
        .max(config.deductions.health_contribution_floor)
        .min(config.deductions.health_contribution_cap)
}

/// The monthly housing fund contribution, capped.
pub fn monthly_housing_fund(config: &CompensationConfig) -> Decimal {
    (config.salary.monthly * config.deductions.housing_fund_rate)
        .min(config.deductions.housing_contribution_cap)
}

/// Computes the deductions withheld from one semi-monthly period.
///
/// These are process-wide figures derived from the configuration alone;
/// they do not vary per period.
///
/// # Example
///
/// ```no_run
/// use paywatch::calculation::semi_monthly_deductions;
/// use paywatch::config::ConfigLoader;
///
/// let config = ConfigLoader::load("config/paywatch").unwrap().into_config();
/// let deductions = semi_monthly_deductions(&config);
/// assert!(deductions.total > rust_decimal::Decimal::ZERO);
/// ```
pub fn semi_monthly_deductions(config: &CompensationConfig) -> DeductionBreakdown {
    let withholding_tax = annual_withholding_tax(config) / SEMI_MONTHLY_PERIODS_PER_YEAR;
    let social_insurance = monthly_social_insurance(config) / Decimal::TWO;
    let health_insurance = monthly_health_insurance(config) / Decimal::TWO;
    let housing_fund = monthly_housing_fund(config) / Decimal::TWO;

    DeductionBreakdown {
        withholding_tax,
        social_insurance,
        health_insurance,
        housing_fund,
        total: withholding_tax + social_insurance + health_insurance + housing_fund,
    }
}

//! Earnings result models.
//!
//! This module contains the value types produced by the calculation
//! engine: the per-shift earnings breakdown, the live display view, and
//! the per-period calendar view.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ShiftState;

/// A canonical earnings breakdown for one shift.
///
/// Hours are split into the base portion, the overtime (or rest-day
/// excess) portion, and the night-differential overlap; each portion
/// carries its peso amount.
///
/// # Example
///
/// ```
/// use paywatch::models::EarningsBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = EarningsBreakdown {
///     base_hours: Decimal::from_str("8").unwrap(),
///     overtime_hours: Decimal::ZERO,
///     night_hours: Decimal::from_str("8").unwrap(),
///     base_amount: Decimal::from_str("2080").unwrap(),
///     overtime_amount: Decimal::ZERO,
///     night_amount: Decimal::from_str("160").unwrap(),
///     total: Decimal::from_str("2240").unwrap(),
/// };
/// assert_eq!(breakdown.total, breakdown.base_amount + breakdown.night_amount);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsBreakdown {
    /// Hours paid at the base rate.
    pub base_hours: Decimal,
    /// Hours paid at the overtime (or rest-day excess) rate.
    pub overtime_hours: Decimal,
    /// Hours attracting the night differential.
    pub night_hours: Decimal,
    /// Amount earned at the base rate.
    pub base_amount: Decimal,
    /// Amount earned at the overtime rate.
    pub overtime_amount: Decimal,
    /// Amount earned from the night differential.
    pub night_amount: Decimal,
    /// Sum of all amounts.
    pub total: Decimal,
}

impl EarningsBreakdown {
    /// An all-zero breakdown, used before a shift window opens.
    pub fn zero() -> Self {
        Self {
            base_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            night_hours: Decimal::ZERO,
            base_amount: Decimal::ZERO,
            overtime_amount: Decimal::ZERO,
            night_amount: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}

/// The live earnings view recomputed on every tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveBreakdown {
    /// Paid hours worked so far, formatted for display (e.g. `"8h 32m"`).
    pub hours_worked_display: String,
    /// Earnings at the base rate.
    pub base_earnings: Decimal,
    /// Earnings from the night differential.
    pub night_earnings: Decimal,
    /// Earnings at the overtime rate.
    pub overtime_earnings: Decimal,
    /// Total earnings for the shift so far.
    pub total_earnings: Decimal,
    /// Lifecycle state of the current shift instance.
    pub shift_state: ShiftState,
}

/// One calendar cell of a period view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// The calendar date.
    pub date: NaiveDate,
    /// Earnings attributed to the date (recorded, derived, or projected).
    pub earnings: Decimal,
    /// Whether the date is a Saturday or Sunday.
    pub is_weekend: bool,
    /// Whether the date is the current date.
    pub is_today: bool,
    /// Whether a weekend shift entry exists for the date.
    pub is_recorded_weekend: bool,
}

/// A rendered semi-monthly calendar: per-day earnings plus period totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodView {
    /// Human-readable period title (e.g. `"August 1-15, 2026"`).
    pub title: String,
    /// One cell per date of the period, in calendar order.
    pub days: Vec<DayCell>,
    /// Sum of all daily earnings plus any allowance.
    pub period_gross: Decimal,
    /// Gross minus the semi-monthly statutory deductions.
    pub period_net_total: Decimal,
}

/// Everything the presentation layer needs after one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// The live shift breakdown.
    pub live: LiveBreakdown,
    /// Calendar view for days 1-15 of the current month.
    pub period_one: PeriodView,
    /// Calendar view for day 16 onward of the current month.
    pub period_two: PeriodView,
}

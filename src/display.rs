//! Display-ready value formatting.
//!
//! Pure string formatting for the presentation layer: peso amounts with
//! thousands separators and worked-hours strings. No I/O happens here.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Formats paid hours as a worked-time string such as `"8h 32m"`.
///
/// Negative values clamp to `"0h 0m"`.
///
/// # Example
///
/// ```
/// use paywatch::display::format_hours_worked;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_hours_worked(Decimal::from_str("8.5").unwrap()), "8h 30m");
/// assert_eq!(format_hours_worked(Decimal::ZERO), "0h 0m");
/// ```
pub fn format_hours_worked(hours: Decimal) -> String {
    let total_minutes = (hours * Decimal::from(60))
        .round()
        .to_i64()
        .unwrap_or(0)
        .max(0);
    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}

/// Formats a peso amount with thousands separators and two decimals,
/// e.g. `"₱12,345.67"`.
///
/// # Example
///
/// ```
/// use paywatch::display::format_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_money(Decimal::from_str("12345.678").unwrap()), "₱12,345.68");
/// assert_eq!(format_money(Decimal::from_str("-250").unwrap()), "-₱250.00");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let plain = format!("{:.2}", rounded.abs());

    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}\u{20B1}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_hours_formatting() {
        assert_eq!(format_hours_worked(dec("0")), "0h 0m");
        assert_eq!(format_hours_worked(dec("0.25")), "0h 15m");
        assert_eq!(format_hours_worked(dec("9")), "9h 0m");
        assert_eq!(format_hours_worked(dec("9.25")), "9h 15m");
        assert_eq!(format_hours_worked(dec("10.75")), "10h 45m");
    }

    #[test]
    fn test_hours_formatting_clamps_negative() {
        assert_eq!(format_hours_worked(dec("-3")), "0h 0m");
    }

    #[test]
    fn test_money_formatting_small_amounts() {
        assert_eq!(format_money(dec("0")), "\u{20B1}0.00");
        assert_eq!(format_money(dec("5")), "\u{20B1}5.00");
        assert_eq!(format_money(dec("160")), "\u{20B1}160.00");
        assert_eq!(format_money(dec("999.9")), "\u{20B1}999.90");
    }

    #[test]
    fn test_money_formatting_groups_thousands() {
        assert_eq!(format_money(dec("1960")), "\u{20B1}1,960.00");
        assert_eq!(format_money(dec("17600")), "\u{20B1}17,600.00");
        assert_eq!(format_money(dec("1234567.89")), "\u{20B1}1,234,567.89");
    }

    #[test]
    fn test_money_formatting_rounds_to_centavos() {
        assert_eq!(format_money(dec("1866.666")), "\u{20B1}1,866.67");
    }

    #[test]
    fn test_money_formatting_negative_amounts() {
        assert_eq!(format_money(dec("-2497.50")), "-\u{20B1}2,497.50");
    }
}

//! Semi-monthly pay period model.
//!
//! A calendar month is partitioned into two pay periods: the 1st through
//! the 15th, and the 16th through the end of the month. Each period earns
//! a fixed half of the monthly base salary.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifies one of the two pay periods of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// Days 1-15.
    First,
    /// Day 16 through the end of the month.
    Second,
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::First => write!(f, "Period 1"),
            Period::Second => write!(f, "Period 2"),
        }
    }
}

/// A concrete semi-monthly pay period with its inclusive date range.
///
/// # Example
///
/// ```
/// use paywatch::models::{PayPeriod, Period};
/// use chrono::NaiveDate;
///
/// let anchor = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
/// let period = PayPeriod::for_date(Period::Second, anchor);
///
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2026, 8, 16).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2026, 8, 31).unwrap());
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 8, 20).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Which half of the month this is.
    pub period: Period,
    /// The first date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Builds the pay period of the month containing `anchor`.
    ///
    /// Any date of the month works as the anchor; the engine passes the
    /// current date.
    pub fn for_date(period: Period, anchor: NaiveDate) -> Self {
        let first_of_month = anchor.with_day(1).expect("day 1 exists in every month");

        let (start_date, end_date) = match period {
            Period::First => (
                first_of_month,
                first_of_month
                    .with_day(15)
                    .expect("day 15 exists in every month"),
            ),
            Period::Second => (
                first_of_month
                    .with_day(16)
                    .expect("day 16 exists in every month"),
                Self::last_day_of_month(first_of_month),
            ),
        };

        Self {
            period,
            start_date,
            end_date,
        }
    }

    /// Returns the last calendar date of the month containing `date`.
    fn last_day_of_month(date: NaiveDate) -> NaiveDate {
        date.with_day(1)
            .expect("day 1 exists in every month")
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .expect("last day of month is representable")
    }

    /// Checks if a given date falls within this pay period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Enumerates the dates of the period in order.
    ///
    /// The iterator is finite and can be restarted by calling the method
    /// again.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end_date;
        self.start_date.iter_days().take_while(move |d| *d <= end)
    }

    /// Formats a human-readable title such as `"August 1-15, 2026"`.
    pub fn title(&self) -> String {
        format!(
            "{} {}\u{2013}{}, {}",
            month_name(self.start_date.month()),
            self.start_date.day(),
            self.end_date.day(),
            self.start_date.year()
        )
    }
}

/// Returns the English name of a month number (1-12).
fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

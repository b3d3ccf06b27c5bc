//! Data models for the earnings tracker.

mod earnings;
mod pay_period;
mod shift;

pub use earnings::{DayCell, DisplayState, EarningsBreakdown, LiveBreakdown, PeriodView};
pub use pay_period::{PayPeriod, Period};
pub use shift::{
    MAX_WEEKEND_SHIFT_HOURS, ShiftInstance, ShiftState, WeekendShiftEntry, parse_time_of_day,
};

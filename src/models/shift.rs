//! Shift models and input-boundary validation.
//!
//! This module defines the per-window shift instance with its small state
//! machine, the manually recorded weekend shift entry, and the helpers
//! that validate raw user input before it reaches the engine.

use chrono::{NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Longest weekend shift accepted from manual entry.
///
/// The night-differential math assumes a shift spans at most a calendar
/// day and the next; longer entries are rejected at the input boundary.
pub const MAX_WEEKEND_SHIFT_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// The lifecycle state of a shift instance.
///
/// A shift starts `Running` and reaches exactly one terminal state:
/// `Ended` by explicit user action, or `AutoFinalized` when a weekday
/// shift runs past its scheduled paid hours plus the grace period. There
/// is no transition back to `Running` within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftState {
    /// The shift window is open and earnings are still accruing.
    Running,
    /// The shift was ended by an explicit user action.
    Ended,
    /// The shift was finalized automatically after the grace period.
    AutoFinalized,
}

impl ShiftState {
    /// Returns `true` for the two terminal states.
    pub fn is_terminal(self) -> bool {
        matches!(self, ShiftState::Ended | ShiftState::AutoFinalized)
    }
}

impl std::fmt::Display for ShiftState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftState::Running => write!(f, "Running"),
            ShiftState::Ended => write!(f, "Ended"),
            ShiftState::AutoFinalized => write!(f, "Auto-finalized"),
        }
    }
}

/// One live occurrence of the nightly shift window.
///
/// An instance is anchored to its window start (always the configured
/// shift start hour on some calendar day) and carries the state machine
/// for that window. When a terminal state is reached the paid hours are
/// frozen so subsequent queries keep reporting the final breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftInstance {
    /// Unique identifier for this occurrence, used in log correlation.
    pub id: Uuid,
    /// The instant the shift window opens.
    pub window_start: NaiveDateTime,
    /// Current lifecycle state.
    pub state: ShiftState,
    /// Paid hours frozen at the instant a terminal state was reached.
    pub frozen_paid_hours: Option<Decimal>,
}

impl ShiftInstance {
    /// Creates a new running instance for the given window start.
    pub fn new(window_start: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            window_start,
            state: ShiftState::Running,
            frozen_paid_hours: None,
        }
    }
}

/// A manually recorded weekend shift.
///
/// Weekend work is not driven by the scheduled window; the user records
/// the hours worked and the start time, and earnings are derived on
/// demand. Absence of an entry for a weekend date means zero earnings.
///
/// # Example
///
/// ```
/// use paywatch::models::WeekendShiftEntry;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let entry = WeekendShiftEntry::new(
///     Decimal::new(80, 1), // 8.0 hours
///     NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(entry.hours_worked, Decimal::new(80, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekendShiftEntry {
    /// Hours worked, positive and at most [`MAX_WEEKEND_SHIFT_HOURS`].
    pub hours_worked: Decimal,
    /// Local time of day the shift started.
    pub start_time: NaiveTime,
}

impl WeekendShiftEntry {
    /// Creates a validated entry.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShiftHours`] when `hours_worked` is
    /// not positive or exceeds [`MAX_WEEKEND_SHIFT_HOURS`].
    pub fn new(hours_worked: Decimal, start_time: NaiveTime) -> EngineResult<Self> {
        if hours_worked <= Decimal::ZERO {
            return Err(EngineError::InvalidShiftHours {
                value: hours_worked.to_string(),
                message: "must be positive".to_string(),
            });
        }
        if hours_worked > MAX_WEEKEND_SHIFT_HOURS {
            return Err(EngineError::InvalidShiftHours {
                value: hours_worked.to_string(),
                message: format!("must be at most {MAX_WEEKEND_SHIFT_HOURS}"),
            });
        }
        Ok(Self {
            hours_worked,
            start_time,
        })
    }
}

/// Parses a user-entered time of day in strict 24-hour `HH:MM` form.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeOfDay`] for anything chrono cannot
/// parse as `%H:%M`, including trailing input such as seconds.
///
/// # Example
///
/// ```
/// use paywatch::models::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// let time = parse_time_of_day("22:00").unwrap();
/// assert_eq!(time, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
/// assert!(parse_time_of_day("25:99").is_err());
/// assert!(parse_time_of_day("10 pm").is_err());
/// ```
pub fn parse_time_of_day(value: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| EngineError::InvalidTimeOfDay {
        value: value.to_string(),
    })
}

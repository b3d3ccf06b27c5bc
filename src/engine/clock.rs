//! Clock abstraction.
//!
//! All shift-boundary math is expressed in wall-clock hours of a fixed
//! target timezone (UTC+8), independent of the host locale. The engine
//! never reads the system clock directly; it is handed instants through
//! the [`Clock`] trait so tests can feed synthetic timestamps.

use std::sync::{Arc, Mutex};

use chrono::{Duration, FixedOffset, NaiveDateTime, Utc};

/// Provides the current instant as local wall-clock time.
pub trait Clock {
    /// Returns the current instant in the target timezone.
    fn now_local(&self) -> NaiveDateTime;
}

/// The host clock normalized to a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// A clock fixed to Philippine Standard Time (UTC+8).
    pub fn manila() -> Self {
        Self {
            offset: FixedOffset::east_opt(8 * 3600).expect("UTC+8 is a valid fixed offset"),
        }
    }

    /// A clock fixed to an arbitrary UTC offset.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::manila()
    }
}

impl Clock for SystemClock {
    fn now_local(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.offset).naive_local()
    }
}

/// A settable clock for tests and replay.
///
/// Clones share the same underlying instant, so a test can hold one
/// handle while the ticker holds another.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Arc<Mutex<NaiveDateTime>>,
}

impl FixedClock {
    /// Creates a clock frozen at the given instant.
    pub fn new(instant: NaiveDateTime) -> Self {
        Self {
            instant: Arc::new(Mutex::new(instant)),
        }
    }

    /// Moves the clock to a new instant.
    pub fn set(&self, instant: NaiveDateTime) {
        *self.instant.lock().expect("clock mutex poisoned") = instant;
    }

    /// Advances the clock by a duration.
    pub fn advance(&self, duration: Duration) {
        let mut instant = self.instant.lock().expect("clock mutex poisoned");
        *instant += duration;
    }
}

impl Clock for FixedClock {
    fn now_local(&self) -> NaiveDateTime {
        *self.instant.lock().expect("clock mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    #[test]
    fn test_system_clock_applies_utc_plus_8() {
        let clock = SystemClock::manila();
        let expected = Utc::now().naive_utc() + Duration::hours(8);
        let actual = clock.now_local();

        let drift = (actual - expected).num_seconds().abs();
        assert!(drift < 5, "drift was {drift}s");
    }

    #[test]
    fn test_fixed_clock_returns_its_instant() {
        let instant = make_datetime("2026-08-03", "22:00:00");
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now_local(), instant);
    }

    #[test]
    fn test_fixed_clock_set_and_advance() {
        let clock = FixedClock::new(make_datetime("2026-08-03", "22:00:00"));

        clock.advance(Duration::minutes(90));
        assert_eq!(
            clock.now_local(),
            make_datetime("2026-08-03", "23:30:00")
        );

        clock.set(make_datetime("2026-08-04", "08:15:00"));
        assert_eq!(
            clock.now_local(),
            make_datetime("2026-08-04", "08:15:00")
        );
    }

    #[test]
    fn test_fixed_clock_clones_share_the_instant() {
        let clock = FixedClock::new(make_datetime("2026-08-03", "22:00:00"));
        let handle = clock.clone();

        handle.advance(Duration::hours(1));
        assert_eq!(
            clock.now_local(),
            make_datetime("2026-08-03", "23:00:00")
        );
    }
}

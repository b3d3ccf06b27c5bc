//! The payroll tracker.
//!
//! [`PayrollTracker`] owns the two persisted ledgers and the state
//! machine of the current shift window. Every query is a pure function
//! of the supplied instant and the in-memory state; the only mutations
//! are the discrete commands and the one-shot auto-finalization on the
//! tick path. Each ledger mutation writes through the configured store.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::calculation::{
    calculate_rest_day_breakdown, calculate_weekday_breakdown, aggregate_period, day_kind,
    is_rest_day, paid_elapsed_hours, shift_window_start, DayKind,
};
use crate::config::CompensationConfig;
use crate::display::format_hours_worked;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DisplayState, EarningsBreakdown, LiveBreakdown, Period, PeriodView, ShiftInstance,
    ShiftState, WeekendShiftEntry,
};
use crate::storage::{LedgerStore, RecordedLedger, WeekendLedger};

/// Tracks live shift earnings and the semi-monthly ledgers.
///
/// Construct one per session with a loaded [`CompensationConfig`] and a
/// [`LedgerStore`]; drive it with [`PayrollTracker::tick`] and the
/// command methods. The tracker is single-threaded by design: callers
/// serialize ticks and commands on one logical thread of control.
pub struct PayrollTracker<S: LedgerStore> {
    config: CompensationConfig,
    store: S,
    recorded: RecordedLedger,
    weekend_entries: WeekendLedger,
    shift: Option<ShiftInstance>,
}

impl<S: LedgerStore> PayrollTracker<S> {
    /// Creates a tracker, loading both ledgers from the store.
    ///
    /// Malformed or unreadable persisted data is not fatal: the affected
    /// ledger starts empty and a warning is logged.
    pub fn new(config: CompensationConfig, store: S) -> Self {
        let recorded = store.load_recorded().unwrap_or_else(|error| {
            warn!(error = %error, "Falling back to an empty weekday ledger");
            RecordedLedger::new()
        });
        let weekend_entries = store.load_weekend_entries().unwrap_or_else(|error| {
            warn!(error = %error, "Falling back to an empty weekend ledger");
            WeekendLedger::new()
        });

        info!(
            recorded_shifts = recorded.len(),
            weekend_entries = weekend_entries.len(),
            "Payroll tracker initialized"
        );

        Self {
            config,
            store,
            recorded,
            weekend_entries,
            shift: None,
        }
    }

    /// Returns the active compensation configuration.
    pub fn config(&self) -> &CompensationConfig {
        &self.config
    }

    /// Returns the finalized weekday earnings ledger.
    pub fn recorded(&self) -> &RecordedLedger {
        &self.recorded
    }

    /// Returns the weekend shift entries.
    pub fn weekend_entries(&self) -> &WeekendLedger {
        &self.weekend_entries
    }

    /// Returns the state of the current shift instance, if one exists.
    pub fn shift_state(&self) -> Option<ShiftState> {
        self.shift.as_ref().map(|s| s.state)
    }

    /// One tick of the engine: roll the shift window if a new one has
    /// opened, attempt auto-finalization, and produce the display state.
    pub fn tick(&mut self, now: NaiveDateTime) -> DisplayState {
        self.ensure_shift(now);
        self.try_auto_finalize(now);

        DisplayState {
            live: self.current_live(now),
            period_one: self.period_view(Period::First, now.date()),
            period_two: self.period_view(Period::Second, now.date()),
        }
    }

    /// The live earnings breakdown for the current shift window.
    pub fn live_breakdown(&mut self, now: NaiveDateTime) -> LiveBreakdown {
        self.ensure_shift(now);
        self.current_live(now)
    }

    /// The calendar view for one pay period of the month containing
    /// `today`.
    pub fn period_view(&self, period: Period, today: NaiveDate) -> PeriodView {
        aggregate_period(
            period,
            today,
            &self.recorded,
            &self.weekend_entries,
            &self.config,
        )
    }

    /// Ends the running shift, freezing its paid hours.
    ///
    /// A weekday shift's final total is written to the ledger,
    /// overwriting any earlier value for the same date. Once the shift
    /// has reached a terminal state further calls are no-ops.
    pub fn end_shift(&mut self, now: NaiveDateTime) -> LiveBreakdown {
        self.ensure_shift(now);

        if let Some(shift) = &self.shift {
            if shift.state == ShiftState::Running {
                let paid = paid_elapsed_hours(now, shift.window_start, &self.config.schedule);
                let date = shift.window_start.date();
                let shift_id = shift.id;
                let breakdown = self.breakdown_for_paid_hours(date, paid);

                if let Some(shift) = self.shift.as_mut() {
                    shift.state = ShiftState::Ended;
                    shift.frozen_paid_hours = Some(paid);
                }

                if day_kind(date) == DayKind::Weekday {
                    self.recorded.insert(date, breakdown.total);
                    info!(
                        shift_id = %shift_id,
                        date = %date,
                        total = %breakdown.total,
                        "Shift ended, weekday earnings recorded"
                    );
                    self.persist_recorded();
                } else {
                    info!(
                        shift_id = %shift_id,
                        date = %date,
                        "Rest-day shift ended, nothing recorded"
                    );
                }
            }
        }

        self.current_live(now)
    }

    /// Best-effort final auto-record, invoked when the session is about
    /// to terminate. Advisory only; there is no completion guarantee.
    pub fn session_end(&mut self, now: NaiveDateTime) {
        info!("Session ending, attempting final auto-record");
        self.ensure_shift(now);
        self.try_auto_finalize(now);
    }

    /// Records or replaces the weekend shift entry for a date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotARestDay`] for a Monday-Friday date and
    /// [`EngineError::InvalidShiftHours`] for non-positive or over-long
    /// hours. On error no state changes.
    pub fn record_weekend_entry(
        &mut self,
        date: NaiveDate,
        hours_worked: Decimal,
        start_time: NaiveTime,
    ) -> EngineResult<()> {
        if !is_rest_day(date) {
            return Err(EngineError::NotARestDay { date });
        }

        let entry = WeekendShiftEntry::new(hours_worked, start_time)?;
        self.weekend_entries.insert(date, entry);
        info!(date = %date, hours = %hours_worked, "Weekend shift entry recorded");
        self.persist_weekend();
        Ok(())
    }

    /// Deletes the weekend shift entry for a date.
    ///
    /// Returns `true` when an entry existed. Deleting a date with no
    /// entry changes nothing.
    pub fn delete_weekend_entry(&mut self, date: NaiveDate) -> bool {
        if self.weekend_entries.remove(&date).is_some() {
            info!(date = %date, "Weekend shift entry deleted");
            self.persist_weekend();
            true
        } else {
            false
        }
    }

    /// Rolls the shift instance forward when a new window has opened.
    ///
    /// The derived window start may lie in the future (daytime instants
    /// anchor to the upcoming evening); the current instance is only
    /// replaced once the newly derived window has actually begun, so a
    /// finished overnight shift keeps accruing elapsed time toward
    /// auto-finalization through the morning.
    fn ensure_shift(&mut self, now: NaiveDateTime) {
        let derived = shift_window_start(now, &self.config.schedule);

        let roll = match &self.shift {
            None => true,
            Some(shift) => derived != shift.window_start && derived <= now,
        };

        if roll {
            let instance = ShiftInstance::new(derived);
            info!(
                shift_id = %instance.id,
                window_start = %instance.window_start,
                "Opened shift window"
            );
            self.shift = Some(instance);
        }
    }

    /// Finalizes a running weekday shift once the grace period is
    /// exhausted. Fires at most once per shift instance; rest-day
    /// windows are never auto-finalized.
    fn try_auto_finalize(&mut self, now: NaiveDateTime) {
        let Some(shift) = &self.shift else {
            return;
        };
        if shift.state != ShiftState::Running {
            return;
        }

        let date = shift.window_start.date();
        if day_kind(date) == DayKind::RestDay {
            return;
        }

        let paid = paid_elapsed_hours(now, shift.window_start, &self.config.schedule);
        if paid < self.config.paid_hours_threshold() {
            return;
        }

        let shift_id = shift.id;
        let breakdown = calculate_weekday_breakdown(paid, &self.config);

        if let Some(shift) = self.shift.as_mut() {
            shift.state = ShiftState::AutoFinalized;
            shift.frozen_paid_hours = Some(paid);
        }

        self.recorded.insert(date, breakdown.total);
        info!(
            shift_id = %shift_id,
            date = %date,
            total = %breakdown.total,
            "Weekday shift auto-finalized"
        );
        self.persist_recorded();
    }

    /// The breakdown for the current instance, using frozen paid hours
    /// once a terminal state was reached.
    fn current_live(&self, now: NaiveDateTime) -> LiveBreakdown {
        match &self.shift {
            Some(shift) => {
                let paid = shift.frozen_paid_hours.unwrap_or_else(|| {
                    paid_elapsed_hours(now, shift.window_start, &self.config.schedule)
                });
                let breakdown = self.breakdown_for_paid_hours(shift.window_start.date(), paid);

                LiveBreakdown {
                    hours_worked_display: format_hours_worked(paid),
                    base_earnings: breakdown.base_amount,
                    night_earnings: breakdown.night_amount,
                    overtime_earnings: breakdown.overtime_amount,
                    total_earnings: breakdown.total,
                    shift_state: shift.state,
                }
            }
            None => LiveBreakdown {
                hours_worked_display: format_hours_worked(Decimal::ZERO),
                base_earnings: Decimal::ZERO,
                night_earnings: Decimal::ZERO,
                overtime_earnings: Decimal::ZERO,
                total_earnings: Decimal::ZERO,
                shift_state: ShiftState::Running,
            },
        }
    }

    /// Rate selection by the shift's start date: weekday shifts pay base
    /// plus overtime, rest-day shifts pay the rest-day tiers.
    fn breakdown_for_paid_hours(&self, date: NaiveDate, paid: Decimal) -> EarningsBreakdown {
        match day_kind(date) {
            DayKind::Weekday => calculate_weekday_breakdown(paid, &self.config),
            DayKind::RestDay => {
                let window_open =
                    NaiveTime::from_hms_opt(self.config.schedule.shift_start_hour, 0, 0)
                        .expect("shift start hour is validated to 0-23");
                calculate_rest_day_breakdown(paid, window_open, &self.config)
            }
        }
    }

    fn persist_recorded(&self) {
        if let Err(error) = self.store.save_recorded(&self.recorded) {
            warn!(error = %error, "Failed to persist weekday ledger");
        }
    }

    fn persist_weekend(&self) {
        if let Err(error) = self.store.save_weekend_entries(&self.weekend_entries) {
            warn!(error = %error, "Failed to persist weekend ledger");
        }
    }
}

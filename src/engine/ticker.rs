//! The periodic tick driver.
//!
//! The engine itself is synchronous; this module owns the timer that
//! drives it. Each tick reads the clock, runs one recompute, and hands
//! the resulting display state to a render callback. A ctrl-c makes one
//! best-effort final auto-record attempt before the loop returns.

use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::{info, warn};

use crate::models::DisplayState;
use crate::storage::LedgerStore;

use super::clock::Clock;
use super::tracker::PayrollTracker;

/// Drives a [`PayrollTracker`] on a fixed interval.
///
/// # Example
///
/// ```no_run
/// use paywatch::config::ConfigLoader;
/// use paywatch::engine::{PayrollTracker, SystemClock, Ticker};
/// use paywatch::storage::JsonFileStore;
///
/// # async fn run() {
/// let config = ConfigLoader::load("config/paywatch").unwrap().into_config();
/// let mut tracker = PayrollTracker::new(config, JsonFileStore::new("./data"));
///
/// Ticker::default()
///     .run(&mut tracker, &SystemClock::manila(), |state| {
///         println!("{}", state.live.hours_worked_display);
///         true
///     })
///     .await;
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Ticker {
    period: Duration,
}

impl Default for Ticker {
    /// A one-second tick, matching the live display cadence.
    fn default() -> Self {
        Self {
            period: Duration::from_secs(1),
        }
    }
}

impl Ticker {
    /// Creates a ticker with a custom period.
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Runs the tick loop until the render callback returns `false` or a
    /// shutdown signal arrives.
    ///
    /// Ticks run sequentially on the calling task, so no tick observes a
    /// half-applied mutation from another. On ctrl-c the tracker's
    /// session-end hook runs once before the method returns; the attempt
    /// is advisory and carries no completion guarantee.
    pub async fn run<S, C, F>(&self, tracker: &mut PayrollTracker<S>, clock: &C, mut render: F)
    where
        S: LedgerStore,
        C: Clock,
        F: FnMut(DisplayState) -> bool,
    {
        let mut interval = time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(period_ms = self.period.as_millis() as u64, "Ticker started");

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let state = tracker.tick(clock.now_local());
                    if !render(state) {
                        break;
                    }
                }
                signal = tokio::signal::ctrl_c() => {
                    if let Err(error) = signal {
                        warn!(error = %error, "Failed to listen for the shutdown signal");
                    }
                    tracker.session_end(clock.now_local());
                    break;
                }
            }
        }

        info!("Ticker stopped");
    }
}

//! The stateful engine: tracker, clock abstraction, and tick driver.
//!
//! The composition root builds a [`PayrollTracker`] from a loaded
//! configuration and a [`crate::storage::LedgerStore`], then drives it
//! with a [`Ticker`] (or calls [`PayrollTracker::tick`] directly with
//! synthetic instants, which is how the tests work).

mod clock;
mod ticker;
mod tracker;

pub use clock::{Clock, FixedClock, SystemClock};
pub use ticker::Ticker;
pub use tracker::PayrollTracker;

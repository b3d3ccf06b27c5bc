//! Night-shift earnings tracker for a fixed Philippine payroll setup.
//!
//! This crate computes real-time and period-aggregate earnings for a
//! fixed 22:00-08:00 night shift: night differential, rest-day premiums,
//! overtime with a grace period, semi-monthly salary spreading, and
//! statutory deduction estimation. The presentation layer plugs into the
//! engine through the query surface in [`engine`] and the value types in
//! [`models`].

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod storage;

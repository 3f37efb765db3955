// ABOUTME: Workout metrics engine built on the liftlog-core models
// ABOUTME: Pure functions and a records tracker; no I/O and no persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Liftlog Intelligence
//!
//! Everything in this crate is derived from the workout log held by the
//! application crate. Nothing here reads or writes storage, so each piece can
//! be tested on plain vectors of workouts.
//!
//! - **units**: pound/kilogram conversion with display rounding
//! - **records**: monotonic personal record tracking
//! - **aggregation**: weekly summaries and per-exercise history
//! - **progress**: chart series and headline stats from an exercise history

/// Weekly summaries and per-exercise history
pub mod aggregation;

/// Chart series derived from exercise history
pub mod progress;

/// Personal record tracking
pub mod records;

/// Mass unit conversion
pub mod units;

pub use aggregation::{exercise_history, week_bounds, weekly_summary};
pub use progress::{progress_series, progress_stats};
pub use records::PersonalRecordTracker;

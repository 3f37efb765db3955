// ABOUTME: Core data models for the workout log and its derived metrics
// ABOUTME: Re-exports workout, set, personal record, unit and summary types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Every weight held by these types is in the canonical unit (pounds). The
//! display unit only matters at the edges: when a draft is normalized on the
//! way in, and when a value is converted for presentation on the way out.
//!
//! ## Core Models
//!
//! - `Workout`: an immutable, atomically created training session
//! - `ExerciseEntry` / `SetEntry`: the validated contents of a workout
//! - `WorkoutDraft`: raw form input, possibly containing incomplete sets
//! - `PersonalRecord`: heaviest set ever logged for an exercise
//! - `WeightUnit`: display unit preference
//! - `WeeklySummary`, `ExerciseHistoryEntry`, `ProgressPoint`: derived views

mod draft;
mod record;
mod summary;
mod unit;
mod workout;

pub use draft::{ExerciseDraft, SetDraft, WorkoutDraft};
pub use record::{PersonalRecord, PersonalRecords};
pub use summary::{ExerciseHistoryEntry, ProgressPoint, ProgressStats, WeeklySummary};
pub use unit::WeightUnit;
pub use workout::{ExerciseEntry, SetEntry, Workout, WorkoutId};

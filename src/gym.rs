// ABOUTME: GymStore, the explicit store object owning all workout tracker state
// ABOUTME: Orchestrates repository, records tracker, aggregation and persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gym Store
//!
//! The single entry point a front end talks to. It owns the workout log, the
//! personal records table and the unit preference, and writes each of them
//! back to storage synchronously after it changes.
//!
//! ```rust
//! use chrono::Utc;
//! use liftlog::gym::GymStore;
//! use liftlog::models::{ExerciseDraft, WorkoutDraft};
//! use liftlog::storage::MemoryStore;
//!
//! # fn main() -> liftlog::errors::AppResult<()> {
//! let mut gym = GymStore::open(MemoryStore::new());
//! let draft = WorkoutDraft::new()
//!     .exercise(ExerciseDraft::new("Bench Press").set(100.0, 5).set(105.0, 3));
//!
//! gym.add_workout(&draft)?;
//!
//! let record = gym.personal_record("Bench Press");
//! assert_eq!(record.map(|r| r.reps), Some(3));
//! assert_eq!(gym.weekly_summary(&Utc::now()).total_sets, 2);
//! # Ok(())
//! # }
//! ```

use crate::config::StorageConfig;
use crate::constants::COMMON_EXERCISES;
use crate::errors::AppResult;
use crate::models::{
    ExerciseHistoryEntry, PersonalRecord, PersonalRecords, ProgressPoint, ProgressStats,
    WeeklySummary, WeightUnit, Workout, WorkoutDraft, WorkoutId,
};
use crate::repository::WorkoutRepository;
use crate::storage::{KeyValueStore, PersistentStore, StorageBackend};
use chrono::{DateTime, Local, TimeZone, Utc};
use liftlog_intelligence::{aggregation, progress, units, PersonalRecordTracker};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Workout tracker state with its storage
#[derive(Debug)]
pub struct GymStore<S = StorageBackend> {
    persistence: PersistentStore<S>,
    repository: WorkoutRepository,
    records: PersonalRecordTracker,
    unit: WeightUnit,
}

impl GymStore<StorageBackend> {
    /// Open the store described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be created
    pub fn from_config(config: &StorageConfig) -> AppResult<Self> {
        Ok(Self::open(StorageBackend::new(config)?))
    }

    /// Open the store configured by environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the backend
    /// cannot be created
    pub fn from_env() -> AppResult<Self> {
        Self::from_config(&StorageConfig::from_env()?)
    }
}

impl<S: KeyValueStore> GymStore<S> {
    /// Load persisted state from `backend`
    ///
    /// Absent or corrupt slices start out empty (unit: pounds).
    #[must_use]
    pub fn open(backend: S) -> Self {
        let persistence = PersistentStore::new(backend);
        let state = persistence.load();
        Self {
            persistence,
            repository: WorkoutRepository::from_workouts(state.workouts),
            records: PersonalRecordTracker::from_records(state.records),
            unit: state.unit,
        }
    }

    // ── Reads ──────────────────────────────────────────────────────────────

    /// Workouts, most recent first
    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        self.repository.list()
    }

    /// Workout by id
    #[must_use]
    pub fn workout(&self, id: WorkoutId) -> Option<&Workout> {
        self.repository.get(id)
    }

    /// Active display unit
    #[must_use]
    pub const fn unit(&self) -> WeightUnit {
        self.unit
    }

    /// Whole personal records table
    #[must_use]
    pub const fn personal_records(&self) -> &PersonalRecords {
        self.records.records()
    }

    /// Record for one exercise
    #[must_use]
    pub fn personal_record(&self, name: &str) -> Option<&PersonalRecord> {
        self.records.get(name)
    }

    /// Records heaviest first
    #[must_use]
    pub fn ranked_records(&self) -> Vec<(&str, &PersonalRecord)> {
        self.records.ranked()
    }

    /// Exercises that have a record, i.e. the ones worth charting
    #[must_use]
    pub fn tracked_exercises(&self) -> Vec<&str> {
        self.records.exercise_names().collect()
    }

    /// Suggested names for the logging form: the common lifts, then any
    /// other exercise already tracked
    #[must_use]
    pub fn exercise_suggestions(&self) -> Vec<&str> {
        let common: BTreeSet<&str> = COMMON_EXERCISES.iter().copied().collect();
        COMMON_EXERCISES
            .iter()
            .copied()
            .chain(
                self.records
                    .exercise_names()
                    .filter(|name| !common.contains(name)),
            )
            .collect()
    }

    /// Canonical weight in the active unit, rounded for display
    #[must_use]
    pub fn convert_weight(&self, canonical: f64) -> f64 {
        units::to_display(canonical, self.unit)
    }

    /// Canonical volume as thousands of the active unit, e.g. `12.3k`
    #[must_use]
    pub fn format_volume(&self, canonical: f64) -> String {
        units::format_volume_thousands(canonical, self.unit)
    }

    /// Summary of the Monday-start week containing `now`
    #[must_use]
    pub fn weekly_summary<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> WeeklySummary {
        aggregation::weekly_summary(self.repository.list(), now)
    }

    /// Summary of the current local week
    #[must_use]
    pub fn current_week_summary(&self) -> WeeklySummary {
        self.weekly_summary(&Local::now())
    }

    /// Sessions of one exercise, oldest first
    #[must_use]
    pub fn exercise_history(&self, name: &str) -> Vec<ExerciseHistoryEntry> {
        aggregation::exercise_history(self.repository.list(), name)
    }

    /// Chart series for one exercise, oldest first
    #[must_use]
    pub fn progress(&self, name: &str) -> Vec<ProgressPoint> {
        progress::progress_series(&self.exercise_history(name))
    }

    /// Headline progress figures for one exercise
    #[must_use]
    pub fn progress_stats(&self, name: &str) -> Option<ProgressStats> {
        progress::progress_stats(&self.progress(name))
    }

    /// Storage backend
    #[must_use]
    pub const fn storage(&self) -> &S {
        self.persistence.backend()
    }

    // ── Writes ─────────────────────────────────────────────────────────────

    /// Log a workout dated now, entered in the active unit
    ///
    /// Returns `Ok(None)` when the draft holds no complete set.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the log or the records fails; the
    /// workout stays in memory
    pub fn add_workout(&mut self, draft: &WorkoutDraft) -> AppResult<Option<Workout>> {
        self.add_workout_at(draft, Utc::now())
    }

    /// Log a workout with an explicit creation time
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the log or the records fails; the
    /// workout stays in memory
    pub fn add_workout_at(
        &mut self,
        draft: &WorkoutDraft,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Workout>> {
        let Some(workout) = self.repository.append(draft, self.unit, now).cloned() else {
            return Ok(None);
        };

        let improved = self.records.update(&workout);
        if !improved.is_empty() {
            info!(id = %workout.id, exercises = ?improved, "Personal records improved");
        }

        let workouts_saved = self.persistence.save_workouts(self.repository.list());
        let records_saved = if improved.is_empty() {
            Ok(())
        } else {
            self.persistence.save_records(self.records.records())
        };
        workouts_saved.and(records_saved)?;

        Ok(Some(workout))
    }

    /// Delete a workout; returns whether it existed
    ///
    /// Personal records are left as they are; see [`Self::rebuild_records`].
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the log fails
    pub fn delete_workout(&mut self, id: WorkoutId) -> AppResult<bool> {
        if !self.repository.remove(id) {
            return Ok(false);
        }
        self.persistence.save_workouts(self.repository.list())?;
        Ok(true)
    }

    /// Switch between pounds and kilograms; returns the new unit
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the preference fails
    pub fn toggle_unit(&mut self) -> AppResult<WeightUnit> {
        self.set_unit(self.unit.toggled())?;
        Ok(self.unit)
    }

    /// Set the display unit
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the preference fails
    pub fn set_unit(&mut self, unit: WeightUnit) -> AppResult<()> {
        debug!(from = %self.unit, to = %unit, "Changing display unit");
        self.unit = unit;
        self.persistence.save_unit(unit)
    }

    /// Empty the workout log and the records table, persisting both
    ///
    /// The unit preference is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if either save fails
    pub fn clear_all(&mut self) -> AppResult<()> {
        info!(
            workouts = self.repository.len(),
            records = self.records.len(),
            "Clearing all workout data"
        );
        self.repository.clear();
        self.records.clear();

        let workouts_saved = self.persistence.save_workouts(self.repository.list());
        let records_saved = self.persistence.save_records(self.records.records());
        workouts_saved.and(records_saved)
    }

    /// Recompute personal records from the workouts currently in the log
    ///
    /// Records set by deleted workouts disappear or drop to the best
    /// remaining set.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the records fails
    pub fn rebuild_records(&mut self) -> AppResult<()> {
        self.records.rebuild(self.repository.list());
        debug!(records = self.records.len(), "Rebuilt personal records");
        self.persistence.save_records(self.records.records())
    }
}

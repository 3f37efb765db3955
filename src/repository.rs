// ABOUTME: In-memory workout repository, the sole owner of the workout log
// ABOUTME: Validates and normalizes drafts, keeps the log most-recent-first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::{
    ExerciseDraft, ExerciseEntry, SetEntry, WeightUnit, Workout, WorkoutDraft, WorkoutId,
};
use chrono::{DateTime, Utc};
use liftlog_intelligence::units::to_canonical;
use tracing::debug;

/// Ordered collection of workouts, newest first
///
/// Holds no persistence logic; `GymStore` saves after each mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutRepository {
    workouts: Vec<Workout>,
}

impl WorkoutRepository {
    /// Empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository over a previously persisted log
    #[must_use]
    pub const fn from_workouts(workouts: Vec<Workout>) -> Self {
        Self { workouts }
    }

    /// Validate, normalize and store a draft as a new workout
    ///
    /// Incomplete sets are dropped, then exercises left without sets or
    /// without a name. Weights are converted from `unit` to pounds. Returns
    /// `None` and leaves the log untouched when nothing valid remains.
    pub fn append(
        &mut self,
        draft: &WorkoutDraft,
        unit: WeightUnit,
        now: DateTime<Utc>,
    ) -> Option<&Workout> {
        let exercises: Vec<ExerciseEntry> = draft
            .exercises
            .iter()
            .filter_map(|exercise| normalize_exercise(exercise, unit))
            .collect();

        if exercises.is_empty() {
            debug!(
                submitted = draft.exercises.len(),
                "Ignoring workout without any complete set"
            );
            return None;
        }

        let newest = self.workouts.iter().map(|workout| workout.id).max();
        let workout = Workout {
            id: WorkoutId::allocate(now, newest),
            date: now,
            exercises,
            notes: draft
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|notes| !notes.is_empty())
                .map(str::to_owned),
        };
        debug!(
            id = %workout.id,
            exercises = workout.exercises.len(),
            sets = workout.total_sets(),
            "Appending workout"
        );

        self.workouts.insert(0, workout);
        self.workouts.first()
    }

    /// Delete a workout; returns whether it existed
    pub fn remove(&mut self, id: WorkoutId) -> bool {
        let before = self.workouts.len();
        self.workouts.retain(|workout| workout.id != id);
        let removed = self.workouts.len() != before;
        debug!(id = %id, removed, "Remove workout");
        removed
    }

    /// Drop every workout
    pub fn clear(&mut self) {
        self.workouts.clear();
    }

    /// Workouts, most recent first
    #[must_use]
    pub fn list(&self) -> &[Workout] {
        &self.workouts
    }

    /// Workout by id
    #[must_use]
    pub fn get(&self, id: WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id == id)
    }

    /// Number of workouts
    #[must_use]
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    /// Whether the log is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}

/// Keep the complete sets of an exercise, converted to pounds
fn normalize_exercise(draft: &ExerciseDraft, unit: WeightUnit) -> Option<ExerciseEntry> {
    let name = draft.name.trim();
    if name.is_empty() {
        return None;
    }

    let sets: Vec<SetEntry> = draft
        .sets
        .iter()
        .filter_map(|set| set.complete())
        .map(|(weight, reps)| SetEntry {
            weight: to_canonical(weight, unit),
            reps,
        })
        .collect();

    if sets.is_empty() {
        None
    } else {
        Some(ExerciseEntry {
            name: name.to_owned(),
            sets,
        })
    }
}

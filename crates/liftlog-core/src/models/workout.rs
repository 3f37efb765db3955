// ABOUTME: Workout, exercise entry and set models as stored in the workout log
// ABOUTME: All weights are canonical pounds; a workout is immutable once created
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored workout
///
/// Creation-time millisecond timestamp. Ids issued by one repository are
/// strictly increasing even when two workouts are created in the same
/// millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(pub i64);

impl WorkoutId {
    /// Pick the id for a workout created at `now`, given the newest id in use
    #[must_use]
    pub fn allocate(now: DateTime<Utc>, newest: Option<Self>) -> Self {
        let candidate = now.timestamp_millis();
        match newest {
            Some(Self(last)) if candidate <= last => Self(last.saturating_add(1)),
            _ => Self(candidate),
        }
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One performed set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    /// Weight lifted, canonical unit
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
}

impl SetEntry {
    /// Weight times reps
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// An exercise performed within a workout, with its sets in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    /// Exercise name, matched exactly when building history
    pub name: String,
    /// Sets in the order they were entered
    pub sets: Vec<SetEntry>,
}

impl ExerciseEntry {
    /// Heaviest weight across the sets, `None` when there are no sets
    #[must_use]
    pub fn max_weight(&self) -> Option<f64> {
        self.sets
            .iter()
            .map(|set| set.weight)
            .reduce(f64::max)
    }

    /// The first set (insertion order) lifting the heaviest weight
    #[must_use]
    pub fn top_set(&self) -> Option<&SetEntry> {
        let max = self.max_weight()?;
        self.sets.iter().find(|set| set.weight >= max)
    }

    /// Sum of weight times reps over all sets
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.sets.iter().map(SetEntry::volume).sum()
    }

    /// Sum of reps over all sets
    #[must_use]
    pub fn total_reps(&self) -> u64 {
        self.sets.iter().map(|set| u64::from(set.reps)).sum()
    }
}

/// A logged training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier
    pub id: WorkoutId,
    /// Creation time
    pub date: DateTime<Utc>,
    /// Exercises in the order they were added
    pub exercises: Vec<ExerciseEntry>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Workout {
    /// First exercise entry with exactly this name
    #[must_use]
    pub fn find_exercise(&self, name: &str) -> Option<&ExerciseEntry> {
        self.exercises.iter().find(|exercise| exercise.name == name)
    }

    /// Number of sets across all exercises
    #[must_use]
    pub fn total_sets(&self) -> usize {
        self.exercises.iter().map(|exercise| exercise.sets.len()).sum()
    }

    /// Sum of weight times reps over every set
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.exercises.iter().map(ExerciseEntry::volume).sum()
    }
}

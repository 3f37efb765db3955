// ABOUTME: Raw workout input as assembled by a logging form before validation
// ABOUTME: Sets may be incomplete; only complete sets survive normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A set as typed by the user, in the active display unit
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SetDraft {
    /// Entered weight, `None` when the field is blank
    pub weight: Option<f64>,
    /// Entered reps, `None` when the field is blank
    pub reps: Option<u32>,
}

impl SetDraft {
    /// A fully entered set
    #[must_use]
    pub const fn new(weight: f64, reps: u32) -> Self {
        Self {
            weight: Some(weight),
            reps: Some(reps),
        }
    }

    /// Weight and reps of a complete set
    ///
    /// Zero counts as blank for both fields, and non-finite weights are
    /// rejected.
    #[must_use]
    pub fn complete(&self) -> Option<(f64, u32)> {
        let weight = self.weight.filter(|w| w.is_finite() && *w != 0.0)?;
        let reps = self.reps.filter(|r| *r > 0)?;
        Some((weight, reps))
    }
}

/// An exercise being assembled into a workout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseDraft {
    /// Exercise name as typed or picked from suggestions
    pub name: String,
    /// Sets in entry order
    pub sets: Vec<SetDraft>,
}

impl ExerciseDraft {
    /// Start a draft for the named exercise
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: Vec::new(),
        }
    }

    /// Append a complete set
    #[must_use]
    pub fn set(mut self, weight: f64, reps: u32) -> Self {
        self.sets.push(SetDraft::new(weight, reps));
        self
    }

    /// Append a raw set, possibly with blank fields
    #[must_use]
    pub fn raw_set(mut self, set: SetDraft) -> Self {
        self.sets.push(set);
        self
    }
}

/// A batch of exercises submitted together as one workout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDraft {
    /// Exercises in the order they were added
    pub exercises: Vec<ExerciseDraft>,
    /// Optional notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl WorkoutDraft {
    /// Empty draft
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exercise
    #[must_use]
    pub fn exercise(mut self, exercise: ExerciseDraft) -> Self {
        self.exercises.push(exercise);
        self
    }

    /// Attach notes
    #[must_use]
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

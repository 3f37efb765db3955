// ABOUTME: Derived views over the workout log (weekly summary, history, progress)
// ABOUTME: Never persisted; recomputed from the log on every query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::workout::{SetEntry, Workout};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Totals for the workouts of one Monday-start week
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Number of workouts in the week
    pub total_workouts: usize,
    /// Number of exercise entries across those workouts
    pub total_exercises: usize,
    /// Number of sets across those workouts
    pub total_sets: usize,
    /// Sum of weight times reps, canonical unit
    pub total_volume: f64,
    /// The workouts themselves, most recent first
    pub workouts: Vec<Workout>,
}

/// One session of a given exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistoryEntry {
    /// Date of the workout
    pub date: DateTime<Utc>,
    /// Exercise name
    pub name: String,
    /// Sets performed in that session
    pub sets: Vec<SetEntry>,
}

/// Chart point derived from one history entry
///
/// Weights and volume are canonical; convert for display at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    /// Session date
    pub date: DateTime<Utc>,
    /// Heaviest set of the session
    pub max_weight: f64,
    /// Sum of weight times reps for the session
    pub total_volume: f64,
    /// Mean reps per set
    pub average_reps: f64,
}

/// Headline figures over a progress series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressStats {
    /// Heaviest session maximum
    pub peak_weight: f64,
    /// Largest session volume
    pub max_volume: f64,
    /// Number of sessions
    pub sessions: usize,
}

// ABOUTME: Benchmark fixtures for generating realistic workout logs
// ABOUTME: Deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating workout logs.

use chrono::{DateTime, Duration, TimeZone, Utc};
use liftlog::constants::COMMON_EXERCISES;
use liftlog::models::{ExerciseEntry, SetEntry, Workout, WorkoutId};

/// Predefined log sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum LogSize {
    /// A month of training
    Small,
    /// About a year of training
    Medium,
    /// Several years of training
    Large,
}

impl LogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 12,
            Self::Medium => 150,
            Self::Large => 500,
        }
    }
}

/// Fixed reference instant so runs are comparable
#[must_use]
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 5, 18, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Workout log going back from `reference_now`, most recent first
///
/// Three sessions a week, three exercises per session, four sets each.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_precision_loss)]
pub fn generate_workouts(size: LogSize) -> Vec<Workout> {
    let now = reference_now();
    (0..size.count())
        .map(|index| {
            let date = now - Duration::hours((index * 56) as i64);
            let exercises = (0..3)
                .map(|slot| {
                    let name = COMMON_EXERCISES[(index + slot) % COMMON_EXERCISES.len()];
                    let base = 95.0 + ((index * 7 + slot * 31) % 150) as f64;
                    ExerciseEntry {
                        name: name.to_owned(),
                        sets: (0..4)
                            .map(|set| SetEntry {
                                weight: base + f64::from(set) * 5.0,
                                reps: 10 - set * 2,
                            })
                            .collect(),
                    }
                })
                .collect();
            Workout {
                id: WorkoutId(date.timestamp_millis()),
                date,
                exercises,
                notes: None,
            }
        })
        .collect()
}

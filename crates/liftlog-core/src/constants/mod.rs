// ABOUTME: Application-wide constants for storage layout, units, and exercise catalog
// ABOUTME: Single source of truth for persisted key names and the pound/kilogram factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Keys under which the three pieces of persisted state live
pub mod storage_keys {
    /// Workout log, most-recent-first JSON array
    pub const WORKOUTS: &str = "gymWorkouts";
    /// Personal records table, JSON object keyed by exercise name
    pub const PERSONAL_RECORDS: &str = "gymPRs";
    /// Display unit preference, stored as a bare token
    pub const UNIT: &str = "gymUnit";
}

/// Mass unit constants
pub mod units {
    /// Pounds per kilogram. Canonical storage is in pounds.
    pub const LBS_PER_KG: f64 = 2.204_62;

    /// Persisted token for pounds
    pub const LBS_TOKEN: &str = "lbs";

    /// Persisted token for kilograms
    pub const KG_TOKEN: &str = "kg";
}

/// Exercise names offered as suggestions when logging a workout
pub const COMMON_EXERCISES: &[&str] = &[
    "Bench Press",
    "Squat",
    "Deadlift",
    "Overhead Press",
    "Barbell Row",
    "Pull-ups",
    "Dips",
    "Romanian Deadlift",
    "Leg Press",
    "Leg Curl",
    "Lat Pulldown",
    "Bicep Curl",
];

/// Default directory name for file-backed storage under the platform data dir
pub const DEFAULT_DATA_DIR_NAME: &str = "liftlog";

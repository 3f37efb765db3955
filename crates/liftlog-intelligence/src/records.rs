// ABOUTME: Personal record tracker, a monotonic best-set table per exercise
// ABOUTME: Extended by each appended workout, rebuilt only on explicit request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog_core::models::{PersonalRecord, PersonalRecords, Workout};
use std::cmp::Ordering;
use tracing::debug;

/// Best set per exercise name
///
/// `update` only ever raises a record. Removing a workout from the log does
/// not lower anything here; `rebuild` recomputes the whole table when the
/// caller wants records that match the remaining log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalRecordTracker {
    records: PersonalRecords,
}

impl PersonalRecordTracker {
    /// Empty tracker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracker seeded from a persisted table
    #[must_use]
    pub const fn from_records(records: PersonalRecords) -> Self {
        Self { records }
    }

    /// Fold a normalized workout into the table
    ///
    /// Returns the names of exercises whose record changed.
    pub fn update(&mut self, workout: &Workout) -> Vec<String> {
        let mut improved = Vec::new();

        for exercise in &workout.exercises {
            let Some(top) = exercise.top_set() else {
                continue;
            };

            let beats_existing = self
                .records
                .get(&exercise.name)
                .is_none_or(|current| top.weight > current.weight);

            if beats_existing {
                debug!(
                    exercise = %exercise.name,
                    weight = top.weight,
                    reps = top.reps,
                    "New personal record"
                );
                self.records.insert(
                    exercise.name.clone(),
                    PersonalRecord {
                        weight: top.weight,
                        date: workout.date,
                        reps: top.reps,
                    },
                );
                improved.push(exercise.name.clone());
            }
        }

        improved
    }

    /// Recompute the table from scratch, oldest workout first
    pub fn rebuild<'a, I>(&mut self, workouts: I)
    where
        I: IntoIterator<Item = &'a Workout>,
    {
        let mut ordered: Vec<&Workout> = workouts.into_iter().collect();
        ordered.sort_by_key(|workout| (workout.date, workout.id));

        self.records.clear();
        for workout in ordered {
            self.update(workout);
        }
    }

    /// Drop every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Record for an exercise, if any
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PersonalRecord> {
        self.records.get(name)
    }

    /// Whole table
    #[must_use]
    pub const fn records(&self) -> &PersonalRecords {
        &self.records
    }

    /// Records sorted heaviest first, ties broken by name
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, &PersonalRecord)> {
        let mut ranked: Vec<(&str, &PersonalRecord)> = self
            .records
            .iter()
            .map(|(name, record)| (name.as_str(), record))
            .collect();
        ranked.sort_by(|(a_name, a), (b_name, b)| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a_name.cmp(b_name))
        });
        ranked
    }

    /// Names of every exercise with a record
    pub fn exercise_names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Number of tracked exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no record exists yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use liftlog_core::models::{ExerciseEntry, SetEntry, WorkoutId};

    fn workout(day: i64, exercises: &[(&str, &[(f64, u32)])]) -> Workout {
        let date = Utc.with_ymd_and_hms(2025, 3, 3, 18, 0, 0).unwrap() + Duration::days(day);
        Workout {
            id: WorkoutId(date.timestamp_millis()),
            date,
            exercises: exercises
                .iter()
                .map(|(name, sets)| ExerciseEntry {
                    name: (*name).to_owned(),
                    sets: sets
                        .iter()
                        .map(|&(weight, reps)| SetEntry { weight, reps })
                        .collect(),
                })
                .collect(),
            notes: None,
        }
    }

    #[test]
    fn test_first_workout_sets_record_from_top_set() {
        let mut tracker = PersonalRecordTracker::new();
        let first = workout(0, &[("Bench Press", &[(100.0, 5), (105.0, 3)])]);

        let improved = tracker.update(&first);

        assert_eq!(improved, vec!["Bench Press".to_owned()]);
        let record = tracker.get("Bench Press").unwrap();
        assert!((record.weight - 105.0).abs() < f64::EPSILON);
        assert_eq!(record.reps, 3);
        assert_eq!(record.date, first.date);
    }

    #[test]
    fn test_lighter_and_equal_workouts_do_not_replace_record() {
        let mut tracker = PersonalRecordTracker::new();
        let first = workout(0, &[("Bench Press", &[(105.0, 3)])]);
        tracker.update(&first);

        assert!(tracker
            .update(&workout(1, &[("Bench Press", &[(95.0, 8)])]))
            .is_empty());
        assert!(tracker
            .update(&workout(2, &[("Bench Press", &[(105.0, 6)])]))
            .is_empty());

        let record = tracker.get("Bench Press").unwrap();
        assert_eq!(record.reps, 3);
        assert_eq!(record.date, first.date);
    }

    #[test]
    fn test_rebuild_drops_records_of_removed_workouts() {
        let heavy = workout(0, &[("Squat", &[(315.0, 1)])]);
        let light = workout(1, &[("Squat", &[(275.0, 5)])]);
        let mut tracker = PersonalRecordTracker::new();
        tracker.update(&heavy);
        tracker.update(&light);

        tracker.rebuild([&light]);

        let record = tracker.get("Squat").unwrap();
        assert!((record.weight - 275.0).abs() < f64::EPSILON);
        assert_eq!(record.reps, 5);
    }

    #[test]
    fn test_rebuild_keeps_earliest_of_equal_records() {
        let early = workout(0, &[("Deadlift", &[(405.0, 1)])]);
        let late = workout(3, &[("Deadlift", &[(405.0, 2)])]);
        let mut tracker = PersonalRecordTracker::new();

        // Most-recent-first, as the log stores them
        tracker.rebuild([&late, &early]);

        assert_eq!(tracker.get("Deadlift").unwrap().date, early.date);
    }

    #[test]
    fn test_ranked_orders_heaviest_first() {
        let mut tracker = PersonalRecordTracker::new();
        tracker.update(&workout(
            0,
            &[
                ("Bench Press", &[(185.0, 5)]),
                ("Deadlift", &[(405.0, 1)]),
                ("Squat", &[(315.0, 3)]),
                ("Barbell Row", &[(185.0, 8)]),
            ],
        ));

        let names: Vec<&str> = tracker.ranked().into_iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Deadlift", "Squat", "Barbell Row", "Bench Press"]);
    }

    #[test]
    fn test_clear_empties_table() {
        let mut tracker = PersonalRecordTracker::new();
        tracker.update(&workout(0, &[("Dips", &[(45.0, 10)])]));
        assert_eq!(tracker.len(), 1);

        tracker.clear();
        assert!(tracker.is_empty());
        assert_eq!(tracker.exercise_names().count(), 0);
    }
}

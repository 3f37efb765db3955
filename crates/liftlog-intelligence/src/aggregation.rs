// ABOUTME: Read-time aggregation over the workout log
// ABOUTME: Monday-start weekly summaries and date-ascending exercise history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weekly summaries and exercise history.
//!
//! Both views are computed on every call from the log as it stands; nothing
//! is cached between calls.

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use liftlog_core::models::{ExerciseHistoryEntry, WeeklySummary, Workout};

/// Start of the Monday-start week containing `now`, and start of the next one
///
/// Boundaries are local midnights in `now`'s time zone. A workout belongs to
/// the week when `start <= date < end`, which covers Monday 00:00 through
/// the last instant of Sunday.
#[must_use]
pub fn week_bounds<Tz: TimeZone>(now: &DateTime<Tz>) -> (DateTime<Utc>, DateTime<Utc>) {
    let tz = now.timezone();
    let today = now.date_naive();
    let monday = today - Days::new(u64::from(today.weekday().num_days_from_monday()));
    let next_monday = monday + Days::new(7);
    (start_of_day(&tz, monday), start_of_day(&tz, next_monday))
}

/// First valid local instant of `date`
fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    // Midnight can fall inside a DST gap in a few zones
    (0..=2)
        .find_map(|hour| {
            tz.from_local_datetime(&(midnight + Duration::hours(hour)))
                .earliest()
        })
        .map_or_else(|| midnight.and_utc(), |start| start.with_timezone(&Utc))
}

/// Summarize the workouts that fall in the week containing `now`
///
/// `workouts` is expected most-recent-first and the summary keeps that order.
#[must_use]
pub fn weekly_summary<Tz: TimeZone>(workouts: &[Workout], now: &DateTime<Tz>) -> WeeklySummary {
    let (start, end) = week_bounds(now);

    let week: Vec<Workout> = workouts
        .iter()
        .filter(|workout| workout.date >= start && workout.date < end)
        .cloned()
        .collect();

    WeeklySummary {
        total_workouts: week.len(),
        total_exercises: week.iter().map(|workout| workout.exercises.len()).sum(),
        total_sets: week.iter().map(Workout::total_sets).sum(),
        total_volume: week.iter().map(Workout::volume).sum(),
        workouts: week,
    }
}

/// Every session of the named exercise, oldest first
///
/// Names match exactly. When a workout lists the same exercise twice only the
/// first entry is used.
#[must_use]
pub fn exercise_history(workouts: &[Workout], name: &str) -> Vec<ExerciseHistoryEntry> {
    let mut history: Vec<ExerciseHistoryEntry> = workouts
        .iter()
        .filter_map(|workout| {
            workout
                .find_exercise(name)
                .map(|exercise| ExerciseHistoryEntry {
                    date: workout.date,
                    name: exercise.name.clone(),
                    sets: exercise.sets.clone(),
                })
        })
        .collect();
    history.sort_by_key(|entry| entry.date);
    history
}

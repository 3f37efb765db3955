// ABOUTME: Progress chart series derived from an exercise history
// ABOUTME: Per-session max weight, volume and average reps plus headline stats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use liftlog_core::models::{ExerciseHistoryEntry, ProgressPoint, ProgressStats, SetEntry};

/// One chart point per history entry, in history order
///
/// Entries without sets are skipped.
#[must_use]
pub fn progress_series(history: &[ExerciseHistoryEntry]) -> Vec<ProgressPoint> {
    history
        .iter()
        .filter_map(|entry| {
            let max_weight = entry.sets.iter().map(|set| set.weight).reduce(f64::max)?;
            let total_reps: f64 = entry.sets.iter().map(|set| f64::from(set.reps)).sum();
            Some(ProgressPoint {
                date: entry.date,
                max_weight,
                total_volume: entry.sets.iter().map(SetEntry::volume).sum(),
                average_reps: total_reps / entry.sets.len() as f64,
            })
        })
        .collect()
}

/// Peak weight, peak volume and session count, `None` for an empty series
#[must_use]
pub fn progress_stats(series: &[ProgressPoint]) -> Option<ProgressStats> {
    let peak_weight = series.iter().map(|point| point.max_weight).reduce(f64::max)?;
    let max_volume = series.iter().map(|point| point.total_volume).reduce(f64::max)?;
    Some(ProgressStats {
        peak_weight,
        max_volume,
        sessions: series.len(),
    })
}

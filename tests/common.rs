// ABOUTME: Shared test utilities and fixtures for the liftlog integration tests
// ABOUTME: Provides quiet logging setup, workout drafts and a write-failing backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `liftlog`

use chrono::{DateTime, TimeZone, Utc};
use liftlog::errors::StorageError;
use liftlog::models::{ExerciseDraft, WorkoutDraft};
use liftlog::storage::{KeyValueStore, MemoryStore};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Wednesday 5 March 2025, 18:00 UTC
pub fn wednesday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 5, 18, 0, 0).unwrap()
}

/// UTC instant on a day of March 2025
pub fn march(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
}

/// Draft with a single exercise
pub fn single_exercise(name: &str, sets: &[(f64, u32)]) -> WorkoutDraft {
    let exercise = sets
        .iter()
        .fold(ExerciseDraft::new(name), |draft, &(weight, reps)| {
            draft.set(weight, reps)
        });
    WorkoutDraft::new().exercise(exercise)
}

/// Backend that serves reads from memory and rejects every write
#[derive(Debug, Default)]
pub struct ReadOnlyStore {
    inner: MemoryStore,
}

impl ReadOnlyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only test store".to_owned()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("read-only test store".to_owned()))
    }
}

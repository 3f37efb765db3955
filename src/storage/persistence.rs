// ABOUTME: Typed persistence of the workout log, records table and unit preference
// ABOUTME: Loads fall back to defaults on absent or corrupt values, saves surface errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStore;
use crate::constants::storage_keys;
use crate::errors::AppResult;
use crate::models::{PersonalRecords, WeightUnit, Workout};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Everything restored at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    /// Workout log, most recent first
    pub workouts: Vec<Workout>,
    /// Personal records table
    pub records: PersonalRecords,
    /// Display unit preference
    pub unit: WeightUnit,
}

/// Typed view over a key-value backend
///
/// Each slice of state lives under its own key and is written independently.
#[derive(Debug, Clone)]
pub struct PersistentStore<S> {
    backend: S,
}

impl<S: KeyValueStore> PersistentStore<S> {
    /// Wrap a backend
    #[must_use]
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Restore all persisted state
    ///
    /// Never fails: an absent key, an unreadable backend or a value that does
    /// not decode yields that slice's default.
    #[must_use]
    pub fn load(&self) -> PersistedState {
        let state = PersistedState {
            workouts: self.load_json(storage_keys::WORKOUTS),
            records: self.load_json(storage_keys::PERSONAL_RECORDS),
            unit: self.load_unit(),
        };
        info!(
            workouts = state.workouts.len(),
            records = state.records.len(),
            unit = %state.unit,
            "Loaded workout log"
        );
        state
    }

    /// Persist the workout log
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the backend rejects the write
    pub fn save_workouts(&mut self, workouts: &[Workout]) -> AppResult<()> {
        self.save_json(storage_keys::WORKOUTS, workouts)
    }

    /// Persist the personal records table
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the backend rejects the write
    pub fn save_records(&mut self, records: &PersonalRecords) -> AppResult<()> {
        self.save_json(storage_keys::PERSONAL_RECORDS, records)
    }

    /// Persist the unit preference as its bare token
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write
    pub fn save_unit(&mut self, unit: WeightUnit) -> AppResult<()> {
        self.backend.set(storage_keys::UNIT, unit.as_token())?;
        debug!(unit = %unit, "Saved unit preference");
        Ok(())
    }

    /// Underlying backend
    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "Storage read failed, using default");
                None
            }
        }
    }

    fn load_json<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(raw) = self.read_raw(key) else {
            return T::default();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(key, error = %e, "Discarding corrupt stored value");
            T::default()
        })
    }

    fn load_unit(&self) -> WeightUnit {
        let Some(raw) = self.read_raw(storage_keys::UNIT) else {
            return WeightUnit::default();
        };
        WeightUnit::from_token(&raw).unwrap_or_else(|| {
            warn!(value = %raw, "Unknown stored unit, using default");
            WeightUnit::default()
        })
    }

    fn save_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> AppResult<()> {
        let encoded = serde_json::to_string(value)?;
        self.backend.set(key, &encoded)?;
        debug!(key, bytes = encoded.len(), "Saved state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseEntry, PersonalRecord, SetEntry, WorkoutId};
    use crate::storage::MemoryStore;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_backend_loads_defaults() {
        let store = PersistentStore::new(MemoryStore::new());
        assert_eq!(store.load(), PersistedState::default());
    }

    #[test]
    fn test_round_trip_all_slices() -> AppResult<()> {
        let date = Utc.with_ymd_and_hms(2025, 3, 5, 18, 0, 0).unwrap();
        let workouts = vec![Workout {
            id: WorkoutId(date.timestamp_millis()),
            date,
            exercises: vec![ExerciseEntry {
                name: "Squat".to_owned(),
                sets: vec![SetEntry {
                    weight: 225.0,
                    reps: 5,
                }],
            }],
            notes: Some("felt strong".to_owned()),
        }];
        let mut records = PersonalRecords::new();
        records.insert(
            "Squat".to_owned(),
            PersonalRecord {
                weight: 225.0,
                date,
                reps: 5,
            },
        );

        let mut store = PersistentStore::new(MemoryStore::new());
        store.save_workouts(&workouts)?;
        store.save_records(&records)?;
        store.save_unit(WeightUnit::Kg)?;

        let state = store.load();
        assert_eq!(state.workouts, workouts);
        assert_eq!(state.records, records);
        assert_eq!(state.unit, WeightUnit::Kg);
        assert_eq!(
            store.backend().get(storage_keys::UNIT)?.as_deref(),
            Some("kg")
        );
        Ok(())
    }

    #[test]
    fn test_corrupt_slices_fall_back_independently() {
        let records = r#"{"Bench Press":{"weight":105,"date":"2025-03-03T18:00:00.000Z","reps":3}}"#;
        let store = PersistentStore::new(MemoryStore::with_entries([
            (storage_keys::WORKOUTS, "[{not json"),
            (storage_keys::PERSONAL_RECORDS, records),
            (storage_keys::UNIT, "stone"),
        ]));

        let state = store.load();

        assert!(state.workouts.is_empty());
        assert_eq!(state.records.len(), 1);
        assert_eq!(state.unit, WeightUnit::Lbs);
    }
}

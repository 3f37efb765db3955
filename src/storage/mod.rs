// ABOUTME: Key-value storage abstraction for the three persisted slices of state
// ABOUTME: Pluggable backends (in-memory, file) selected through StorageBackend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Backend selection from configuration
pub mod factory;
/// One-file-per-key backend
pub mod file;
/// Process-local backend
pub mod memory;
/// Typed load/save of workouts, records and unit
pub mod persistence;

pub use factory::StorageBackend;
pub use file::FileStore;
pub use memory::MemoryStore;
pub use persistence::{PersistedState, PersistentStore};

use crate::errors::StorageError;

/// Durable string storage addressed by key
///
/// Calls are synchronous and complete before returning; a successful `set`
/// means the value is durable as far as the backend can tell.
pub trait KeyValueStore {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; deleting an absent key succeeds
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

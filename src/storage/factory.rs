// ABOUTME: Storage factory for configuration-based backend selection
// ABOUTME: Wraps the memory and file backends behind a single KeyValueStore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{FileStore, KeyValueStore, MemoryStore};
use crate::config::{BackendKind, StorageConfig};
use crate::errors::StorageError;
use tracing::info;

/// Unified storage interface over the supported backends
#[derive(Debug, Clone)]
pub enum StorageBackend {
    /// Process-local, nothing persisted
    Memory(MemoryStore),
    /// Files under a data directory
    File(FileStore),
}

impl StorageBackend {
    /// Create the backend described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the file backend's directory cannot be created
    pub fn new(config: &StorageConfig) -> Result<Self, StorageError> {
        match config.backend {
            BackendKind::Memory => {
                info!("Initializing in-memory workout storage");
                Ok(Self::Memory(MemoryStore::new()))
            }
            BackendKind::File => {
                info!(path = %config.data_dir.display(), "Initializing file workout storage");
                Ok(Self::File(FileStore::open(&config.data_dir)?))
            }
        }
    }
}

impl KeyValueStore for StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Memory(store) => store.get(key),
            Self::File(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Memory(store) => store.set(key, value),
            Self::File(store) => store.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match self {
            Self::Memory(store) => store.remove(key),
            Self::File(store) => store.remove(key),
        }
    }
}

// ABOUTME: Structured error types for key-value storage backends
// ABOUTME: Carries the key involved so persistence failures can be traced to a state slice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io;
use thiserror::Error;

/// Errors raised by a key-value storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem access failed for a key
    #[error("I/O failure on key '{key}': {source}")]
    Io {
        /// Key being read or written
        key: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Key is not usable as a storage name
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    /// Backend cannot serve requests at all
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Wrap an I/O error with the key it occurred on
    #[must_use]
    pub fn io(key: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source,
        }
    }
}

// ABOUTME: Storage configuration types for the file and in-memory backends
// ABOUTME: Reads LIFTLOG_BACKEND and LIFTLOG_DATA_DIR with platform defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::DEFAULT_DATA_DIR_NAME;
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable selecting the backend
pub const BACKEND_ENV: &str = "LIFTLOG_BACKEND";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "LIFTLOG_DATA_DIR";

/// Which key-value backend to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// One file per key in the data directory
    #[default]
    File,
    /// Process memory only
    Memory,
}

impl FromStr for BackendKind {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(AppError::config(format!(
                "{BACKEND_ENV} must be 'file' or 'memory', got '{other}'"
            ))),
        }
    }
}

impl Display for BackendKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::File => write!(f, "file"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Where and how workout state is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Backend kind
    pub backend: BackendKind,
    /// Directory for the file backend
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// In-memory configuration, for tests and throwaway sessions
    #[must_use]
    pub fn memory() -> Self {
        Self {
            backend: BackendKind::Memory,
            ..Self::default()
        }
    }

    /// File configuration rooted at `data_dir`
    #[must_use]
    pub fn file(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: BackendKind::File,
            data_dir: data_dir.into(),
        }
    }

    /// Load storage configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if `LIFTLOG_BACKEND` names an unknown backend or
    /// `LIFTLOG_DATA_DIR` is set but empty
    pub fn from_env() -> AppResult<Self> {
        let backend = match env::var(BACKEND_ENV) {
            Ok(value) => value.parse()?,
            Err(_) => BackendKind::default(),
        };

        let data_dir = match env::var(DATA_DIR_ENV) {
            Ok(value) if value.trim().is_empty() => {
                return Err(AppError::config(format!("{DATA_DIR_ENV} is set but empty")));
            }
            Ok(value) => PathBuf::from(value),
            Err(_) => default_data_dir(),
        };

        Ok(Self { backend, data_dir })
    }
}

/// Platform data directory, or a hidden directory under the working dir
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(format!(".{DEFAULT_DATA_DIR_NAME}")),
        |dir| dir.join(DEFAULT_DATA_DIR_NAME),
    )
}

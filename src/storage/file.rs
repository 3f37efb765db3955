// ABOUTME: File-backed key-value store, one file per key in a data directory
// ABOUTME: Writes go through a temporary file and an atomic rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStore;
use crate::errors::StorageError;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Suffix of the scratch file used while replacing a value
const TEMP_SUFFIX: &str = ".tmp";

/// Key-value store living in a directory on disk
///
/// Each key maps to a file of the same name. A crash mid-write leaves either
/// the old value or the new one, never a truncated file.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `root`
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StorageError::io(root.display().to_string(), e))?;
        debug!(path = %root.display(), "Opened file store");
        Ok(Self { root })
    }

    /// Directory holding the key files
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if valid {
            Ok(self.root.join(key))
        } else {
            Err(StorageError::InvalidKey(key.to_owned()))
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let temp = self.root.join(format!(".{key}{TEMP_SUFFIX}"));

        let write_temp = || -> io::Result<()> {
            let mut file = fs::File::create(&temp)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()
        };
        write_temp().map_err(|e| StorageError::io(key, e))?;
        fs::rename(&temp, &path).map_err(|e| StorageError::io(key, e))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io(key, e)),
        }
    }
}

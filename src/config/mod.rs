// ABOUTME: Configuration management for storage location and backend selection
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Liftlog
//!
//! - **Storage**: which key-value backend holds the workout log, and where

/// Storage backend configuration from environment variables
pub mod storage;

pub use storage::{BackendKind, StorageConfig};

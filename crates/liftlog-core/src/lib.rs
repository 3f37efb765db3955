// ABOUTME: Core types and constants for the Liftlog workout tracker
// ABOUTME: Foundation crate with error handling, storage keys, and workout data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Liftlog Core
//!
//! Foundation crate providing shared types and constants for the Liftlog
//! workout tracker. The intelligence crate and the application crate both
//! build on these definitions.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `StorageError`
//! - **constants**: Storage keys, unit conversion factor, and exercise suggestions
//! - **models**: Workouts, sets, personal records, units, and derived summaries

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Workout, `ExerciseEntry`, `PersonalRecord`, `WeightUnit`, etc.)
pub mod models;

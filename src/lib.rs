// ABOUTME: Main library entry point for the liftlog strength training tracker
// ABOUTME: Wires storage, the workout repository and the metrics engine into GymStore
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Liftlog
//!
//! Core of a personal strength-training log. A user records workouts made of
//! exercises and sets, sees a summary of the current week, follows personal
//! records per exercise and charts progress over time. Weights are stored in
//! pounds and shown in pounds or kilograms.
//!
//! ## Architecture
//!
//! - **Models** (`liftlog-core`): workouts, drafts, records and summaries
//! - **Intelligence** (`liftlog-intelligence`): unit conversion, record
//!   tracking, weekly aggregation and progress series
//! - **Storage**: a key-value abstraction with in-memory and file backends
//! - **Repository**: validation and ordering of the workout log
//! - **Gym**: [`GymStore`], the object a front end drives
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use liftlog::config::StorageConfig;
//! use liftlog::gym::GymStore;
//! use liftlog::logging;
//!
//! fn main() -> anyhow::Result<()> {
//!     logging::init_from_env()?;
//!     let gym = GymStore::from_config(&StorageConfig::from_env()?)?;
//!     println!("{} workouts logged", gym.workouts().len());
//!     Ok(())
//! }
//! ```

/// Storage configuration from environment variables
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// The workout tracker store
pub mod gym;

/// Structured logging setup
pub mod logging;

/// Domain models
pub mod models;

/// Workout log validation and ordering
pub mod repository;

/// Key-value persistence
pub mod storage;

pub use gym::GymStore;
pub use liftlog_intelligence as intelligence;

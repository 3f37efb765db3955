// ABOUTME: Error types for the application crate, re-exported from liftlog-core
// ABOUTME: Keeps crate::errors paths stable for storage, repository and store code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_core::errors::*;

// ABOUTME: Data models re-exported from liftlog-core
// ABOUTME: Workouts, drafts, records, units and derived summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_core::models::*;

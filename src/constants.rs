// ABOUTME: Application constants re-exported from liftlog-core
// ABOUTME: Storage keys, unit factor and exercise suggestions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_core::constants::*;

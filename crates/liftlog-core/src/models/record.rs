// ABOUTME: Personal record model, the heaviest set ever logged per exercise
// ABOUTME: Records are keyed by exact exercise name in an ordered table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Heaviest set logged for one exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecord {
    /// Weight of the record set, canonical unit
    pub weight: f64,
    /// Date of the workout that set the record
    pub date: DateTime<Utc>,
    /// Reps performed on the record set
    pub reps: u32,
}

/// Records table keyed by exercise name
pub type PersonalRecords = BTreeMap<String, PersonalRecord>;

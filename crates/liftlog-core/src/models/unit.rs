// ABOUTME: Display unit preference for weights (pounds or kilograms)
// ABOUTME: Persisted as a bare token, defaulting to the canonical pound unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::{KG_TOKEN, LBS_TOKEN};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mass unit used to present and enter weights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Pounds, the canonical storage unit
    #[default]
    #[serde(rename = "lbs")]
    Lbs,
    /// Kilograms
    #[serde(rename = "kg")]
    Kg,
}

impl WeightUnit {
    /// Token used when persisting the preference
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Lbs => LBS_TOKEN,
            Self::Kg => KG_TOKEN,
        }
    }

    /// Parse a persisted token; unknown tokens yield `None`
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            LBS_TOKEN => Some(Self::Lbs),
            KG_TOKEN => Some(Self::Kg),
            _ => None,
        }
    }

    /// The other unit
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Lbs => Self::Kg,
            Self::Kg => Self::Lbs,
        }
    }

    /// Whether this is the canonical storage unit
    #[must_use]
    pub const fn is_canonical(self) -> bool {
        matches!(self, Self::Lbs)
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown weight unit '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pounds() {
        assert_eq!(WeightUnit::default(), WeightUnit::Lbs);
        assert!(WeightUnit::default().is_canonical());
    }

    #[test]
    fn test_toggle_flips_between_units() {
        assert_eq!(WeightUnit::Lbs.toggled(), WeightUnit::Kg);
        assert_eq!(WeightUnit::Kg.toggled().toggled(), WeightUnit::Kg);
    }

    #[test]
    fn test_token_parsing() {
        assert_eq!(WeightUnit::from_token("kg"), Some(WeightUnit::Kg));
        assert_eq!(WeightUnit::from_token(" lbs\n"), Some(WeightUnit::Lbs));
        assert_eq!(WeightUnit::from_token("stone"), None);
        assert!("KG".parse::<WeightUnit>().is_err());
    }
}

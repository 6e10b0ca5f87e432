//! # Action Priority
//!
//! Three tiers with fixed numeric weights used by the action merge:
//!
//! ```text
//! Recommended (1) < Important (2) < Critical (3)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Priority tier of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Must be done before (or immediately after) market entry.
    Critical,
    /// Statutory obligation without an imminent deadline.
    Important,
    /// Voluntary or best-practice measure.
    Recommended,
}

impl Priority {
    /// All tiers, most severe first.
    pub const ALL: [Priority; 3] = [Self::Critical, Self::Important, Self::Recommended];

    /// Numeric merge weight: critical=3, important=2, recommended=1.
    pub fn weight(self) -> u8 {
        match self {
            Self::Critical => 3,
            Self::Important => 2,
            Self::Recommended => 1,
        }
    }

    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Important => "important",
            Self::Recommended => "recommended",
        }
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight().cmp(&other.weight())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Self::Critical),
            "important" => Ok(Self::Important),
            "recommended" => Ok(Self::Recommended),
            other => Err(ValidationError::UnknownVariant {
                vocabulary: "priority",
                value: other.to_string(),
            }),
        }
    }
}

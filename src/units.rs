//! Display-only unit label for linear quantities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label for the working linear unit ("feet", "meters", ...).
///
/// Carried through to output headers only, never used in arithmetic:
/// the math is unit independent as long as every linear input shares
/// one unit, so no conversion layer exists on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DistanceUnit(String);

impl DistanceUnit {
    /// Wrap a unit label. Leading and trailing whitespace is trimmed.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into().trim().to_string())
    }

    /// The label text.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl FromStr for DistanceUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("unit label cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

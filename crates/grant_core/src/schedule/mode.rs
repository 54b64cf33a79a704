//! Schedule lookup mode.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a vesting schedule answers for a year it has no entry for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScheduleMode {
    /// A missing year is an error.
    #[default]
    Strict,
    /// A missing year takes the nearest earlier entry, or zero if none exists.
    Lenient,
}

/// Unrecognised schedule mode string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid schedule mode: {0}. Must be one of: strict, lenient")]
pub struct ParseScheduleModeError(
    /// The rejected input
    pub String,
);

impl FromStr for ScheduleMode {
    type Err = ParseScheduleModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(ScheduleMode::Strict),
            "lenient" => Ok(ScheduleMode::Lenient),
            _ => Err(ParseScheduleModeError(s.to_string())),
        }
    }
}

impl ScheduleMode {
    /// Lower-case name as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleMode::Strict => "strict",
            ScheduleMode::Lenient => "lenient",
        }
    }
}

impl fmt::Display for ScheduleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

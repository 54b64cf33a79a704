//! Error types for structured error handling.
//!
//! This module provides:
//! - `ParameterError`: Violated positivity or finiteness preconditions on valuation inputs
//! - `ScheduleError`: Incomplete or out-of-range vesting schedules
//! - `LedgerError`: Record lists that do not cover 2024-2035 in order

use super::year::Year;
use thiserror::Error;

/// Invalid valuation parameters.
///
/// Raised before the per-year recurrence starts. Each variant names the
/// offending field so callers can point at the input that failed.
///
/// # Variants
/// - `NonPositiveShares`: A share total is zero
/// - `NonPositivePrice`: A purchase or strike price is not strictly positive
/// - `InvalidBasePrice`: The seed share price is negative or not finite
/// - `NonFiniteRate`: A growth or redemption rate is `NaN` or infinite
///
/// # Examples
/// ```
/// use grant_core::types::ParameterError;
///
/// let err = ParameterError::NonPositivePrice { field: "strike_price", value: 0.0 };
/// assert_eq!(format!("{}", err), "strike_price must be positive, got 0");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ParameterError {
    /// A share total is zero.
    #[error("{field} must be positive, got {value}")]
    NonPositiveShares {
        /// Name of the failing field
        field: &'static str,
        /// Supplied value
        value: u64,
    },

    /// A reference price is zero, negative, or `NaN`.
    #[error("{field} must be positive, got {value}")]
    NonPositivePrice {
        /// Name of the failing field
        field: &'static str,
        /// Supplied value
        value: f64,
    },

    /// The seed share price is negative or not finite.
    #[error("base_share_price must be finite and non-negative, got {value}")]
    InvalidBasePrice {
        /// Supplied value
        value: f64,
    },

    /// A rate is `NaN` or infinite.
    #[error("{field} must be finite, got {value}")]
    NonFiniteRate {
        /// Name of the failing field
        field: &'static str,
        /// Supplied value
        value: f64,
    },
}

impl ParameterError {
    /// Returns the name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ParameterError::NonPositiveShares { field, .. }
            | ParameterError::NonPositivePrice { field, .. }
            | ParameterError::NonFiniteRate { field, .. } => *field,
            ParameterError::InvalidBasePrice { .. } => "base_share_price",
        }
    }
}

/// Vesting schedule errors.
///
/// # Variants
/// - `MissingYears`: Strict lookup found projection years with no entry
/// - `YearOutOfRange`: An entry was supplied for a year outside 2025-2035
///
/// # Examples
/// ```
/// use grant_core::types::{ScheduleError, Year};
///
/// let err = ScheduleError::MissingYears { years: vec![Year::new(2030), Year::new(2031)] };
/// assert_eq!(format!("{}", err), "Vesting schedule is missing years: 2030, 2031");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ScheduleError {
    /// One or more projection years have no vested-share entry.
    #[error("Vesting schedule is missing years: {}", join_years(.years))]
    MissingYears {
        /// Every missing year, in chronological order
        years: Vec<Year>,
    },

    /// Entry supplied for a year outside the projection range.
    #[error("Vesting year {year} outside projection range 2025-2035")]
    YearOutOfRange {
        /// The rejected year
        year: Year,
    },
}

/// Ledger construction errors.
///
/// # Variants
/// - `WrongLength`: Not exactly one record per year 2024-2035
/// - `OutOfOrder`: A record sits at another year's position
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LedgerError {
    /// Record count differs from the number of ledger years.
    #[error("Ledger must hold one record per year 2024-2035, got {len} records")]
    WrongLength {
        /// Number of records supplied
        len: usize,
    },

    /// Records are not in chronological order.
    #[error("Ledger records must be in chronological order: expected {expected}, found {found}")]
    OutOfOrder {
        /// Year required at this position
        expected: Year,
        /// Year actually found
        found: Year,
    },
}

fn join_years(years: &[Year]) -> String {
    years
        .iter()
        .map(Year::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

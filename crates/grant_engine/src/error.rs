//! Valuation error types.

use grant_core::types::{ParameterError, ScheduleError, Year};
use thiserror::Error;

/// Errors raised before the recurrence starts.
///
/// Once the per-year loop begins every operation is total, so these are
/// the only ways a valuation can fail.
///
/// # Examples
/// ```
/// use grant_core::types::Parameters;
/// use grant_engine::{compute, ValuationError};
///
/// let params = Parameters { strike_price: 0.0, ..Parameters::reference() };
/// match compute(&params) {
///     Err(ValuationError::InvalidParameter(err)) => assert_eq!(err.field(), "strike_price"),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    /// A positivity or finiteness precondition failed.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),

    /// The vesting schedule could not be resolved.
    #[error("Incomplete schedule: {0}")]
    IncompleteSchedule(#[from] ScheduleError),

    /// A snapshot was requested for a year without a valued record.
    #[error("Year {year} is not a projection year (2025-2035)")]
    NotAProjectionYear {
        /// The requested year
        year: Year,
    },
}

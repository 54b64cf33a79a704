//! Core calendar, parameter, and error types.
//!
//! This module provides:
//! - `year`: The `Year` newtype and the fixed projection horizon constants
//! - `parameters`: The immutable `Parameters` record consumed by the valuation engine
//! - `error`: Structured error types for parameter and schedule validation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Year`], [`SEED_YEAR`], [`FIRST_PROJECTION_YEAR`], [`FIRST_REDEMPTION_YEAR`], [`FINAL_YEAR`] from `year`
//! - [`Parameters`], [`REFERENCE_BASE_SHARE_PRICE`] from `parameters`
//! - [`ParameterError`], [`ScheduleError`], [`LedgerError`] from `error`

pub mod error;
pub mod parameters;
pub mod year;

// Re-export commonly used types at module level
pub use error::{LedgerError, ParameterError, ScheduleError};
pub use parameters::{Parameters, REFERENCE_BASE_SHARE_PRICE};
pub use year::{
    Year, FINAL_YEAR, FIRST_PROJECTION_YEAR, FIRST_REDEMPTION_YEAR, LEDGER_YEARS,
    PROJECTION_YEARS, SEED_YEAR,
};

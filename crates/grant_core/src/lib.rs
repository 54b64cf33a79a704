//! # grant_core: Foundation Types for Equity Grant Projection
//!
//! ## Layer 1 (Foundation) Role
//!
//! grant_core is the bottom layer of the workspace, providing:
//! - Projection calendar: `Year` and the fixed 2024-2035 horizon (`types::year`)
//! - Immutable valuation inputs: `Parameters` (`types::parameters`)
//! - Vesting schedules with strict/lenient lookup (`schedule`)
//! - Per-year ledger records for both instruments (`ledger`)
//! - Error types: `ParameterError`, `ScheduleError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external dependencies:
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use grant_core::schedule::{ScheduleMode, VestingSchedule};
//! use grant_core::types::{Parameters, Year};
//!
//! let params = Parameters::reference();
//! assert!(params.validate().is_ok());
//!
//! let vested = params
//!     .vesting_schedule
//!     .vested_for(Year::new(2027), ScheduleMode::Strict)
//!     .unwrap();
//! assert_eq!(vested, 80_000);
//!
//! let sparse = VestingSchedule::from_entries([(Year::new(2025), 10_000)]).unwrap();
//! assert!(sparse.resolve(ScheduleMode::Strict).is_err());
//! assert!(sparse.resolve(ScheduleMode::Lenient).is_ok());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for parameters, schedules and ledgers

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod ledger;
pub mod schedule;
pub mod types;

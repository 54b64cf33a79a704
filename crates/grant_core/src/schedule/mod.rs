//! Vesting schedules for the option/A-share grant.
//!
//! This module provides:
//! - [`VestingSchedule`]: Cumulative vested-share counts per projection year
//! - [`ScheduleMode`]: Strict or lenient lookup of missing years
//! - [`VestingAdvisory`]: Non-blocking warnings about implausible schedules
//!
//! # Examples
//!
//! ```
//! use grant_core::schedule::{ScheduleMode, VestingSchedule};
//!
//! let schedule = VestingSchedule::default_preset(100_000);
//! let resolved = schedule.resolve(ScheduleMode::Strict).unwrap();
//! assert_eq!(resolved[0], 60_000);
//! assert_eq!(resolved[10], 100_000);
//! assert!(schedule.advisories(100_000).is_empty());
//! ```

mod advisory;
mod mode;
mod vesting;

pub use advisory::VestingAdvisory;
pub use mode::{ParseScheduleModeError, ScheduleMode};
pub use vesting::{VestingSchedule, DEFAULT_VESTING_PRESET, FULLY_VESTED_COUNT};

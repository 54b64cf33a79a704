//! # grant_engine: Valuation Recurrence for Equity Grants (L2)
//!
//! Projects the value of a common-share holding and an option/A-share grant
//! over 2024-2035 under compounding share-price growth, annual redemption
//! and a vesting schedule.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            grant_engine (L2)            │
//! ├─────────────────────────────────────────┤
//! │  valuation/  - ValuationEngine, compute │
//! │  scenarios/  - redemption grid, growth  │
//! │               comparison                │
//! │  series/     - thousands-scaled charts  │
//! │  parallel/   - Rayon utilities          │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │             grant_core (L1)             │
//! │  Year, Parameters, VestingSchedule,     │
//! │  Ledger                                 │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Purity
//!
//! [`compute`] has no side effects and holds no state: identical inputs
//! give identical ledgers, and independent calls may run on any thread.
//!
//! ## Example
//!
//! ```
//! use grant_core::types::{Parameters, Year};
//! use grant_engine::compute;
//!
//! let ledger = compute(&Parameters::reference()).unwrap();
//! let record = ledger.get(Year::new(2026)).unwrap();
//!
//! assert!((record.share_price - 8.64).abs() < 1e-9);
//! assert!((record.common.common_redeemed - 1_500.0).abs() < 1e-9);
//! assert!((record.grant.redeemed_shares - 3_000.0).abs() < 1e-9);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod parallel;
pub mod scenarios;
pub mod series;
pub mod valuation;

// Re-export commonly used types
pub use error::ValuationError;
pub use parallel::{ParallelConfig, DEFAULT_PARALLEL_THRESHOLD};
pub use scenarios::{
    GrowthSeries, RedemptionGrid, RedemptionScenario, ScenarioLedger, ScenarioRunner,
    YearSnapshot, DEFAULT_GROWTH_RATES, DEFAULT_REDEMPTION_RATES,
};
pub use series::{ChartSeries, SeriesLine};
pub use valuation::{compute, intrinsic_value, ValuationEngine};

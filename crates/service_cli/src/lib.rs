//! # service_cli: the `grants` command-line tool
//!
//! Service layer over [`grant_engine`]: loads a TOML configuration, applies
//! environment and flag overrides, and renders projections as tables, JSON
//! or CSV.
//!
//! ## Commands
//!
//! - `grants project` - Projection tables for one parameter set
//! - `grants export` - Full ledger as CSV
//! - `grants rates` - Redemption-rate grid and year snapshot
//! - `grants growth` - Growth-rate comparison
//! - `grants check` - Configuration and schedule validation

#![deny(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod format;

pub use error::{CliError, Result};

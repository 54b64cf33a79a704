//! Check command implementation
//!
//! Validates the configuration, the valuation inputs and the vesting
//! schedule without running a projection.

use crate::config::GrantsConfig;
use crate::format::format_number;
use crate::{CliError, Result};
use grant_core::schedule::{ScheduleMode, VestingAdvisory};
use tracing::{info, warn};

/// Outcome of a configuration check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    /// Problems that prevent a valuation
    pub errors: Vec<String>,
    /// Non-fatal vesting observations
    pub advisories: Vec<VestingAdvisory>,
}

impl CheckReport {
    /// True when a valuation would succeed.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks `config` under `mode`.
pub fn check(config: &GrantsConfig, mode: ScheduleMode) -> CheckReport {
    let mut report = CheckReport::default();

    let config_valid = match config.validate() {
        Ok(()) => true,
        Err(e) => {
            report.errors.push(e.to_string());
            false
        }
    };

    let params = match config.to_parameters() {
        Ok(params) => params,
        Err(e) => {
            // Bad vesting keys are already listed by validate()
            if config_valid {
                report.errors.push(e.to_string());
            }
            return report;
        }
    };

    report
        .errors
        .extend(params.validation_failures().iter().map(ToString::to_string));

    if let Err(e) = params.vesting_schedule.resolve(mode) {
        report.errors.push(e.to_string());
    }

    report.advisories = params
        .vesting_schedule
        .advisories(params.total_grant_shares);
    report
}

/// Renders a check report.
pub fn render(config: &GrantsConfig, mode: ScheduleMode, report: &CheckReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Schedule mode: {}\n", mode));
    out.push_str(&format!(
        "Common shares: {} | Grant shares: {}\n",
        format_number(config.total_common_shares as f64, 0),
        format_number(config.total_grant_shares as f64, 0)
    ));

    if report.is_ok() {
        out.push_str("Configuration OK\n");
    } else {
        out.push_str(&format!("{} problem(s):\n", report.errors.len()));
        for error in &report.errors {
            out.push_str(&format!("  - {}\n", error));
        }
    }

    for advisory in &report.advisories {
        out.push_str(&format!("  ! {}\n", advisory));
    }
    out
}

/// Run the check command
pub fn run(config: &GrantsConfig, lenient: bool) -> Result<()> {
    let mode = if lenient {
        ScheduleMode::Lenient
    } else {
        config.schedule_mode
    };
    info!(mode = %mode, "Checking configuration");

    let report = check(config, mode);
    for advisory in &report.advisories {
        warn!(year = %advisory.year(), "{}", advisory);
    }
    print!("{}", render(config, mode, &report));

    if report.is_ok() {
        Ok(())
    } else {
        Err(CliError::invalid_argument(format!(
            "configuration check found {} problem(s)",
            report.errors.len()
        )))
    }
}

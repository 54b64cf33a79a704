//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands render their
//! output to a `String` so it can be tested; `run` prints it.

pub mod check;
pub mod export;
pub mod growth;
pub mod project;
pub mod rates;

use crate::config::GrantsConfig;
use crate::Result;
use grant_core::schedule::ScheduleMode;
use grant_core::types::Parameters;
use grant_engine::{ParallelConfig, ScenarioRunner, ValuationEngine};
use tracing::{debug, warn};

/// Converts a whole-percent CLI value to a fractional rate.
#[inline]
pub fn percent_to_rate(percent: f64) -> f64 {
    percent / 100.0
}

/// Per-invocation rate overrides, as fractions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RateOverrides {
    /// Share-price growth rate
    pub growth_rate: Option<f64>,
    /// Common-share redemption rate
    pub common_rate: Option<f64>,
    /// Option redemption rate; giving one turns off `same_rates`
    pub option_rate: Option<f64>,
}

/// Validated configuration plus the engine it selects.
#[derive(Debug, Clone)]
pub struct Context {
    config: GrantsConfig,
    engine: ValuationEngine,
}

impl Context {
    /// Validates `config`; `lenient` forces lenient schedule lookup.
    pub fn new(config: GrantsConfig, lenient: bool) -> Result<Self> {
        config.validate()?;
        let mode = if lenient {
            ScheduleMode::Lenient
        } else {
            config.schedule_mode
        };
        debug!(mode = %mode, "Schedule lookup mode");
        Ok(Self {
            config,
            engine: ValuationEngine::new(mode),
        })
    }

    /// Loaded configuration.
    pub fn config(&self) -> &GrantsConfig {
        &self.config
    }

    /// Engine configured with the selected schedule mode.
    pub fn engine(&self) -> &ValuationEngine {
        &self.engine
    }

    /// Scenario runner sharing this context's engine.
    pub fn runner(&self) -> ScenarioRunner {
        ScenarioRunner::new(self.engine, ParallelConfig::default())
    }

    /// Currency symbol for output.
    pub fn currency(&self) -> &str {
        &self.config.currency_symbol
    }

    /// Valuation inputs after applying `overrides`.
    ///
    /// Vesting advisories are logged as warnings.
    pub fn parameters(&self, overrides: RateOverrides) -> Result<Parameters> {
        let mut config = self.config.clone();
        if let Some(growth) = overrides.growth_rate {
            config.growth_rate = growth;
        }
        if let Some(common) = overrides.common_rate {
            config.common_redemption_rate = common;
        }
        if let Some(option) = overrides.option_rate {
            config.option_redemption_rate = option;
            config.same_rates = false;
        }

        let params = config.to_parameters()?;
        for advisory in params
            .vesting_schedule
            .advisories(params.total_grant_shares)
        {
            warn!(year = %advisory.year(), "{}", advisory);
        }
        Ok(params)
    }
}

//! CLI configuration management.
//!
//! Loads valuation inputs from a TOML file, applies `GRANTS_*` environment
//! overrides and validates the result. Every field defaults to the
//! reference inputs, so an empty file (or no file) is a valid configuration.
//!
//! ```toml
//! growth_rate = 0.15
//! common_redemption_rate = 0.03
//! same_rates = true
//! schedule_mode = "lenient"
//!
//! [vesting]
//! 2025 = 50000
//! 2027 = 100000
//! ```

use grant_core::schedule::{ScheduleMode, VestingSchedule};
use grant_core::types::{Parameters, Year, REFERENCE_BASE_SHARE_PRICE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "grants.toml";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Valuation and presentation settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GrantsConfig {
    /// Annual share-price growth rate (fraction)
    pub growth_rate: f64,
    /// Common-share redemption rate (fraction)
    pub common_redemption_rate: f64,
    /// Option/A-share redemption rate (fraction); ignored while `same_rates` is set
    pub option_redemption_rate: f64,
    /// Apply the common redemption rate to both instruments
    pub same_rates: bool,
    /// Common shares held
    pub total_common_shares: u64,
    /// Price paid per common share
    pub common_purchase_price: f64,
    /// Shares in the option/A-share grant
    pub total_grant_shares: u64,
    /// Option strike price
    pub strike_price: f64,
    /// Share price in 2024
    pub base_share_price: f64,
    /// Custom vesting counts keyed by year; the default preset when absent
    pub vesting: Option<BTreeMap<String, u64>>,
    /// How missing vesting years are treated
    pub schedule_mode: ScheduleMode,
    /// Symbol prefixed to money amounts
    pub currency_symbol: String,
    /// Log level
    pub log_level: String,
}

impl Default for GrantsConfig {
    fn default() -> Self {
        let reference = Parameters::reference();
        Self {
            growth_rate: reference.growth_rate,
            common_redemption_rate: reference.common_redemption_rate,
            option_redemption_rate: reference.option_redemption_rate,
            same_rates: true,
            total_common_shares: reference.total_common_shares,
            common_purchase_price: reference.common_purchase_price,
            total_grant_shares: reference.total_grant_shares,
            strike_price: reference.strike_price,
            base_share_price: REFERENCE_BASE_SHARE_PRICE,
            vesting: None,
            schedule_mode: ScheduleMode::Strict,
            currency_symbol: "£".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl GrantsConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if given, otherwise [`DEFAULT_CONFIG_PATH`] when it exists.
    ///
    /// An explicitly requested file must exist; the default file is optional.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.exists() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply `GRANTS_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Recognised keys: `GRANTS_GROWTH_RATE`, `GRANTS_COMMON_REDEMPTION_RATE`,
    /// `GRANTS_OPTION_REDEMPTION_RATE`, `GRANTS_SCHEDULE_MODE`, `GRANTS_LOG_LEVEL`.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let rate = |key: &'static str| -> Result<Option<f64>, ConfigError> {
            lookup(key)
                .map(|value| {
                    value.trim().parse::<f64>().map_err(|_| ConfigError::InvalidOverride {
                        key,
                        value: value.clone(),
                    })
                })
                .transpose()
        };

        if let Some(growth) = rate("GRANTS_GROWTH_RATE")? {
            self.growth_rate = growth;
        }
        if let Some(common) = rate("GRANTS_COMMON_REDEMPTION_RATE")? {
            self.common_redemption_rate = common;
        }
        if let Some(option) = rate("GRANTS_OPTION_REDEMPTION_RATE")? {
            self.option_redemption_rate = option;
        }
        if let Some(mode) = lookup("GRANTS_SCHEDULE_MODE") {
            self.schedule_mode = mode.parse().map_err(|_| ConfigError::InvalidOverride {
                key: "GRANTS_SCHEDULE_MODE",
                value: mode.clone(),
            })?;
        }
        if let Some(log_level) = lookup("GRANTS_LOG_LEVEL") {
            self.log_level = log_level;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.currency_symbol.trim().is_empty() {
            errors.push("currency_symbol cannot be empty".to_string());
        }

        if let Some(vesting) = &self.vesting {
            for key in vesting.keys() {
                match key.parse::<Year>() {
                    Ok(year) if year.is_projection() => {}
                    Ok(year) => errors.push(format!(
                        "vesting year {} outside projection range 2025-2035",
                        year
                    )),
                    Err(_) => errors.push(format!("vesting key '{}' is not a year", key)),
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Option redemption rate actually used for valuation.
    #[inline]
    pub fn effective_option_rate(&self) -> f64 {
        if self.same_rates {
            self.common_redemption_rate
        } else {
            self.option_redemption_rate
        }
    }

    /// Vesting schedule: the custom table if present, else the default preset.
    pub fn vesting_schedule(&self) -> Result<VestingSchedule, ConfigError> {
        let Some(vesting) = &self.vesting else {
            return Ok(VestingSchedule::default_preset(self.total_grant_shares));
        };

        let mut entries = Vec::with_capacity(vesting.len());
        for (key, &vested) in vesting {
            let year = key
                .parse::<Year>()
                .map_err(|_| ConfigError::Validation(vec![format!(
                    "vesting key '{}' is not a year",
                    key
                )]))?;
            entries.push((year, vested));
        }
        VestingSchedule::from_entries(entries)
            .map_err(|e| ConfigError::Validation(vec![e.to_string()]))
    }

    /// Valuation inputs described by this configuration.
    pub fn to_parameters(&self) -> Result<Parameters, ConfigError> {
        Ok(Parameters {
            growth_rate: self.growth_rate,
            common_redemption_rate: self.common_redemption_rate,
            option_redemption_rate: self.effective_option_rate(),
            total_common_shares: self.total_common_shares,
            common_purchase_price: self.common_purchase_price,
            total_grant_shares: self.total_grant_shares,
            strike_price: self.strike_price,
            base_share_price: self.base_share_price,
            vesting_schedule: self.vesting_schedule()?,
        })
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// IO error reading config file
    #[error("IO error reading {}: {message}", .path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error message
        message: String,
    },

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// An environment override could not be parsed
    #[error("Invalid value '{value}' for {key}")]
    InvalidOverride {
        /// Variable name
        key: &'static str,
        /// Rejected value
        value: String,
    },

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

//! Valuation inputs.

use super::error::ParameterError;
use crate::schedule::VestingSchedule;

/// Reference share price for the seed year 2024.
pub const REFERENCE_BASE_SHARE_PRICE: f64 = 6.00;

/// Immutable inputs for one valuation run.
///
/// Rates are fractions (`0.20` is 20%). They are conventionally in
/// `[0, 0.25]` for growth and `[0, 0.10]` for redemption, but any finite
/// value is accepted and computed as-is.
///
/// # Examples
/// ```
/// use grant_core::types::Parameters;
///
/// let params = Parameters::reference()
///     .with_growth_rate(0.15)
///     .with_redemption_rates(0.03, 0.08);
/// assert!(params.validate().is_ok());
///
/// let broken = Parameters { strike_price: 0.0, total_common_shares: 0, ..params };
/// assert_eq!(broken.validation_failures().len(), 2);
/// assert_eq!(broken.validate().unwrap_err().field(), "total_common_shares");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// Annual compounding share-price growth rate
    pub growth_rate: f64,
    /// Fraction of last year's unsold common shares redeemed each year
    pub common_redemption_rate: f64,
    /// Fraction of last year's vested-unsold grant shares redeemed each year
    pub option_redemption_rate: f64,
    /// Common shares held at the start of the projection
    pub total_common_shares: u64,
    /// Price paid per common share
    pub common_purchase_price: f64,
    /// Shares in the option/A-share grant
    pub total_grant_shares: u64,
    /// Option strike price
    pub strike_price: f64,
    /// Share price in the seed year 2024
    pub base_share_price: f64,
    /// Cumulative vested grant shares per projection year
    pub vesting_schedule: VestingSchedule,
}

impl Parameters {
    /// Standard planning inputs.
    ///
    /// 20% growth, 5% redemption on both instruments, 30,000 common shares
    /// bought at 2.00, a 100,000-share grant struck at 6.00, and the default
    /// vesting preset.
    pub fn reference() -> Self {
        Self {
            growth_rate: 0.20,
            common_redemption_rate: 0.05,
            option_redemption_rate: 0.05,
            total_common_shares: 30_000,
            common_purchase_price: 2.00,
            total_grant_shares: 100_000,
            strike_price: 6.00,
            base_share_price: REFERENCE_BASE_SHARE_PRICE,
            vesting_schedule: VestingSchedule::default_preset(100_000),
        }
    }

    /// Returns a copy with a different growth rate.
    pub fn with_growth_rate(mut self, growth_rate: f64) -> Self {
        self.growth_rate = growth_rate;
        self
    }

    /// Returns a copy with different redemption rates.
    pub fn with_redemption_rates(mut self, common: f64, option: f64) -> Self {
        self.common_redemption_rate = common;
        self.option_redemption_rate = option;
        self
    }

    /// Returns a copy with a different vesting schedule.
    pub fn with_vesting_schedule(mut self, schedule: VestingSchedule) -> Self {
        self.vesting_schedule = schedule;
        self
    }

    /// Checks the positivity and finiteness preconditions.
    ///
    /// # Errors
    ///
    /// Returns the first failure in field declaration order; see
    /// [`Parameters::validation_failures`] for the complete list.
    pub fn validate(&self) -> Result<(), ParameterError> {
        match self.validation_failures().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Every violated precondition, in field declaration order.
    pub fn validation_failures(&self) -> Vec<ParameterError> {
        let mut failures = Vec::new();

        for (field, value) in [
            ("growth_rate", self.growth_rate),
            ("common_redemption_rate", self.common_redemption_rate),
            ("option_redemption_rate", self.option_redemption_rate),
        ] {
            if !value.is_finite() {
                failures.push(ParameterError::NonFiniteRate { field, value });
            }
        }

        if self.total_common_shares == 0 {
            failures.push(ParameterError::NonPositiveShares {
                field: "total_common_shares",
                value: self.total_common_shares,
            });
        }
        // `!(x > 0.0)` also catches NaN
        if !(self.common_purchase_price > 0.0) {
            failures.push(ParameterError::NonPositivePrice {
                field: "common_purchase_price",
                value: self.common_purchase_price,
            });
        }
        if self.total_grant_shares == 0 {
            failures.push(ParameterError::NonPositiveShares {
                field: "total_grant_shares",
                value: self.total_grant_shares,
            });
        }
        if !(self.strike_price > 0.0) {
            failures.push(ParameterError::NonPositivePrice {
                field: "strike_price",
                value: self.strike_price,
            });
        }
        if !(self.base_share_price.is_finite() && self.base_share_price >= 0.0) {
            failures.push(ParameterError::InvalidBasePrice {
                value: self.base_share_price,
            });
        }

        failures
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::reference()
    }
}

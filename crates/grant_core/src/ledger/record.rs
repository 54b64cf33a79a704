//! Per-year ledger records.

use crate::types::Year;

/// Common-share sub-ledger for one year.
///
/// Invariant for every projection year:
/// `unsold_common_shares + cumulative_common_redeemed == total_common_shares`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommonLedger {
    /// Shares redeemed this year
    pub common_redeemed: f64,
    /// Shares redeemed up to and including this year
    pub cumulative_common_redeemed: f64,
    /// Shares still held
    pub unsold_common_shares: f64,
    /// Cash realised by this year's redemption
    pub common_redemption_value: f64,
    /// Cash realised by all redemptions so far
    pub cumulative_common_redemption_value: f64,
    /// Intrinsic value of the shares still held
    pub unsold_common_value: f64,
    /// Cumulative redemption value plus unsold value
    pub total_common_value: f64,
}

impl CommonLedger {
    /// Seed-year balances: everything unsold, nothing redeemed or valued.
    pub fn seed(total_common_shares: u64) -> Self {
        Self {
            unsold_common_shares: total_common_shares as f64,
            ..Self::default()
        }
    }
}

/// Option/A-share grant sub-ledger for one year.
///
/// Only vested, unredeemed shares carry value; `unsold_shares` counts vested
/// and unvested alike. Invariant for every projection year:
/// `unsold_shares + cumulative_redeemed == total_grant_shares`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrantLedger {
    /// Cumulative vested shares from the schedule
    pub vested_shares: f64,
    /// Vested shares not yet redeemed, floored at zero
    pub vested_unsold_shares: f64,
    /// Shares redeemed this year
    pub redeemed_shares: f64,
    /// Shares redeemed up to and including this year
    pub cumulative_redeemed: f64,
    /// Grant shares not yet redeemed, vested or not
    pub unsold_shares: f64,
    /// Cash realised by this year's redemption
    pub redemption_value: f64,
    /// Cash realised by all redemptions so far
    pub cumulative_redemption_value: f64,
    /// Intrinsic value of vested, unredeemed shares
    pub unsold_value: f64,
    /// Cumulative redemption value plus unsold value
    pub total_grant_value: f64,
}

impl GrantLedger {
    /// Seed-year balances: the whole grant unsold, nothing vested or valued.
    pub fn seed(total_grant_shares: u64) -> Self {
        Self {
            unsold_shares: total_grant_shares as f64,
            ..Self::default()
        }
    }
}

/// One ledger row.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearRecord {
    /// Calendar year
    pub year: Year,
    /// Projected share price
    pub share_price: f64,
    /// Common-share branch
    pub common: CommonLedger,
    /// Option/A-share branch
    pub grant: GrantLedger,
    /// `total_common_value + total_grant_value`; `None` for the seed year
    pub combined_total_value: Option<f64>,
}

impl YearRecord {
    /// Seed row for 2024.
    pub fn seed(
        year: Year,
        base_share_price: f64,
        total_common_shares: u64,
        total_grant_shares: u64,
    ) -> Self {
        Self {
            year,
            share_price: base_share_price,
            common: CommonLedger::seed(total_common_shares),
            grant: GrantLedger::seed(total_grant_shares),
            combined_total_value: None,
        }
    }

    /// Projection row; the combined total is derived from the two branches.
    pub fn valued(year: Year, share_price: f64, common: CommonLedger, grant: GrantLedger) -> Self {
        Self {
            year,
            share_price,
            common,
            grant,
            combined_total_value: Some(common.total_common_value + grant.total_grant_value),
        }
    }

    /// Whether this is the unvalued seed row.
    #[inline]
    pub fn is_seed(&self) -> bool {
        self.combined_total_value.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_seed_record() {
        let record = YearRecord::seed(Year::new(2024), 6.0, 30_000, 100_000);
        assert!(record.is_seed());
        assert_relative_eq!(record.common.unsold_common_shares, 30_000.0);
        assert_relative_eq!(record.grant.unsold_shares, 100_000.0);
        assert_relative_eq!(record.grant.vested_shares, 0.0);
        assert_relative_eq!(record.common.total_common_value, 0.0);
    }

    #[test]
    fn test_valued_record_combines_branches() {
        let common = CommonLedger {
            total_common_value: 150.0,
            ..CommonLedger::default()
        };
        let grant = GrantLedger {
            total_grant_value: 50.0,
            ..GrantLedger::default()
        };
        let record = YearRecord::valued(Year::new(2026), 8.64, common, grant);
        assert!(!record.is_seed());
        assert_eq!(record.combined_total_value, Some(200.0));
    }
}

//! Year-by-year valuation recurrence.
//!
//! A single forward pass over 2024-2035. Each year is computed from the
//! current year's inputs and the immediately preceding record only:
//!
//! 1. 2024 seeds the ledger: base share price, full unsold balances, no flows.
//! 2. For 2025..=2035:
//!    - `share_price = previous * (1 + growth_rate)`
//!    - common branch: redeem `common_redemption_rate` of last year's unsold shares
//!    - grant branch: redeem `option_redemption_rate` of last year's vested-unsold shares
//!    - `combined_total_value = total_common_value + total_grant_value`
//!
//! 2025 never redeems on either branch. Values use the intrinsic value
//! `max(0, share_price - reference_price)` and so never go negative.

use crate::error::ValuationError;
use grant_core::ledger::{CommonLedger, GrantLedger, Ledger, YearRecord};
use grant_core::schedule::ScheduleMode;
use grant_core::types::{
    Parameters, Year, FIRST_REDEMPTION_YEAR, LEDGER_YEARS, PROJECTION_YEARS, SEED_YEAR,
};

/// Per-share intrinsic value: `max(0, share_price - reference_price)`.
///
/// # Examples
/// ```
/// use grant_engine::intrinsic_value;
///
/// assert_eq!(intrinsic_value(8.0, 6.0), 2.0);
/// assert_eq!(intrinsic_value(5.0, 6.0), 0.0);
/// ```
#[inline]
pub fn intrinsic_value(share_price: f64, reference_price: f64) -> f64 {
    (share_price - reference_price).max(0.0)
}

/// Computes the ledger with strict vesting-schedule lookup.
///
/// Shorthand for `ValuationEngine::strict().compute(params)`.
///
/// # Errors
///
/// See [`ValuationEngine::compute`].
pub fn compute(params: &Parameters) -> Result<Ledger, ValuationError> {
    ValuationEngine::strict().compute(params)
}

/// Stateless valuation engine.
///
/// The only configuration is how missing vesting years are treated; the
/// engine holds nothing between calls and is freely shareable across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValuationEngine {
    mode: ScheduleMode,
}

impl ValuationEngine {
    /// Creates an engine with the given schedule lookup mode.
    pub fn new(mode: ScheduleMode) -> Self {
        Self { mode }
    }

    /// Engine that rejects schedules with missing years.
    pub fn strict() -> Self {
        Self::new(ScheduleMode::Strict)
    }

    /// Engine that fills missing years from the nearest earlier entry.
    pub fn lenient() -> Self {
        Self::new(ScheduleMode::Lenient)
    }

    /// Schedule lookup mode.
    #[inline]
    pub fn mode(&self) -> ScheduleMode {
        self.mode
    }

    /// Validates `params` and runs the recurrence.
    ///
    /// # Errors
    ///
    /// - `ValuationError::InvalidParameter` for non-positive share totals or
    ///   reference prices, an invalid base price, or a non-finite rate
    /// - `ValuationError::IncompleteSchedule` for missing vesting years in
    ///   strict mode
    ///
    /// Finite rates outside their conventional ranges are not errors.
    pub fn compute(&self, params: &Parameters) -> Result<Ledger, ValuationError> {
        params.validate()?;
        let vesting = params.vesting_schedule.resolve(self.mode)?;
        Ok(project(params, &vesting))
    }
}

/// Runs the recurrence over pre-validated inputs.
fn project(params: &Parameters, vesting: &[u64; PROJECTION_YEARS]) -> Ledger {
    let mut records = Vec::with_capacity(LEDGER_YEARS);
    let mut previous = YearRecord::seed(
        SEED_YEAR,
        params.base_share_price,
        params.total_common_shares,
        params.total_grant_shares,
    );
    records.push(previous);

    for (year, &vested) in Year::projection_years().zip(vesting.iter()) {
        let share_price = previous.share_price * (1.0 + params.growth_rate);
        let common = step_common(&previous.common, year, share_price, params);
        let grant = step_grant(&previous.grant, year, share_price, vested as f64, params);

        let record = YearRecord::valued(year, share_price, common, grant);
        records.push(record);
        previous = record;
    }

    Ledger::new(records)
}

fn step_common(
    previous: &CommonLedger,
    year: Year,
    share_price: f64,
    params: &Parameters,
) -> CommonLedger {
    let total = params.total_common_shares as f64;

    let (common_redeemed, cumulative_common_redeemed, unsold_common_shares) =
        if year < FIRST_REDEMPTION_YEAR {
            (0.0, previous.cumulative_common_redeemed, total)
        } else {
            let redeemed = previous.unsold_common_shares * params.common_redemption_rate;
            let cumulative = previous.cumulative_common_redeemed + redeemed;
            (redeemed, cumulative, total - cumulative)
        };

    let price_diff = intrinsic_value(share_price, params.common_purchase_price);
    let common_redemption_value = price_diff * common_redeemed;
    let cumulative_common_redemption_value =
        previous.cumulative_common_redemption_value + common_redemption_value;
    let unsold_common_value = price_diff * unsold_common_shares;

    CommonLedger {
        common_redeemed,
        cumulative_common_redeemed,
        unsold_common_shares,
        common_redemption_value,
        cumulative_common_redemption_value,
        unsold_common_value,
        total_common_value: cumulative_common_redemption_value + unsold_common_value,
    }
}

fn step_grant(
    previous: &GrantLedger,
    year: Year,
    share_price: f64,
    vested_shares: f64,
    params: &Parameters,
) -> GrantLedger {
    let total = params.total_grant_shares as f64;

    let (redeemed_shares, cumulative_redeemed, vested_unsold_shares, unsold_shares) =
        if year < FIRST_REDEMPTION_YEAR {
            (0.0, 0.0, vested_shares, total)
        } else {
            let redeemed = previous.vested_unsold_shares * params.option_redemption_rate;
            let cumulative = previous.cumulative_redeemed + redeemed;
            // Redemption is driven by last year's vested-unsold balance, so the
            // current balance can dip below zero without the floor.
            let vested_unsold = (vested_shares - cumulative).max(0.0);
            (redeemed, cumulative, vested_unsold, total - cumulative)
        };

    let opt_diff = intrinsic_value(share_price, params.strike_price);
    let redemption_value = opt_diff * redeemed_shares;
    let cumulative_redemption_value = previous.cumulative_redemption_value + redemption_value;
    // Unvested shares cannot be exercised and carry no value.
    let unsold_value = opt_diff * vested_unsold_shares;

    GrantLedger {
        vested_shares,
        vested_unsold_shares,
        redeemed_shares,
        cumulative_redeemed,
        unsold_shares,
        redemption_value,
        cumulative_redemption_value,
        unsold_value,
        total_grant_value: cumulative_redemption_value + unsold_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use grant_core::schedule::VestingSchedule;
    use grant_core::types::{ParameterError, ScheduleError, FINAL_YEAR, FIRST_PROJECTION_YEAR};

    fn year(y: u16) -> Year {
        Year::new(y)
    }

    #[test]
    fn test_reference_scenario_2026_figures() {
        let ledger = compute(&Parameters::reference()).unwrap();

        let y2025 = ledger.get(year(2025)).unwrap();
        assert_relative_eq!(y2025.share_price, 7.20, epsilon = 1e-12);

        let y2026 = ledger.get(year(2026)).unwrap();
        assert_relative_eq!(y2026.share_price, 8.64, epsilon = 1e-12);
        assert_relative_eq!(y2026.common.common_redeemed, 1_500.0, epsilon = 1e-9);
        assert_relative_eq!(y2026.common.common_redemption_value, 9_960.0, epsilon = 1e-8);
        assert_relative_eq!(y2026.grant.redeemed_shares, 3_000.0, epsilon = 1e-9);
        assert_relative_eq!(y2026.grant.redemption_value, 7_920.0, epsilon = 1e-8);
    }

    #[test]
    fn test_reference_scenario_2026_balances() {
        let ledger = compute(&Parameters::reference()).unwrap();
        let y2026 = ledger.get(year(2026)).unwrap();

        assert_relative_eq!(y2026.common.unsold_common_shares, 28_500.0, epsilon = 1e-9);
        // 70,000 vested less 3,000 redeemed
        assert_relative_eq!(y2026.grant.vested_unsold_shares, 67_000.0, epsilon = 1e-9);
        assert_relative_eq!(y2026.grant.unsold_shares, 97_000.0, epsilon = 1e-9);
        assert_relative_eq!(y2026.grant.unsold_value, 2.64 * 67_000.0, epsilon = 1e-6);
        assert_relative_eq!(
            y2026.common.total_common_value,
            9_960.0 + 6.64 * 28_500.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_2025_grant_values_use_vested_shares() {
        let ledger = compute(&Parameters::reference()).unwrap();
        let y2025 = ledger.get(FIRST_PROJECTION_YEAR).unwrap();

        assert_relative_eq!(y2025.grant.vested_unsold_shares, 60_000.0);
        assert_relative_eq!(y2025.grant.unsold_shares, 100_000.0);
        assert_relative_eq!(y2025.grant.unsold_value, 1.2 * 60_000.0, epsilon = 1e-6);
        assert_relative_eq!(y2025.grant.total_grant_value, y2025.grant.unsold_value);
    }

    #[test]
    fn test_seed_year_is_unvalued() {
        let ledger = compute(&Parameters::reference()).unwrap();
        let seed = ledger.seed_record();

        assert_eq!(seed.year, SEED_YEAR);
        assert_relative_eq!(seed.share_price, 6.0);
        assert_relative_eq!(seed.common.unsold_common_shares, 30_000.0);
        assert_relative_eq!(seed.grant.unsold_shares, 100_000.0);
        assert_relative_eq!(seed.common.total_common_value, 0.0);
        assert_relative_eq!(seed.grant.total_grant_value, 0.0);
        assert_eq!(seed.combined_total_value, None);
    }

    #[test]
    fn test_combined_total_is_sum_of_branches() {
        let ledger = compute(&Parameters::reference()).unwrap();
        for record in ledger.projection() {
            let expected = record.common.total_common_value + record.grant.total_grant_value;
            assert_eq!(record.combined_total_value, Some(expected));
        }
    }

    #[test]
    fn test_2025_no_redemption_with_high_rates() {
        let params = Parameters::reference().with_redemption_rates(0.9, 0.9);
        let ledger = compute(&params).unwrap();
        let y2025 = ledger.get(FIRST_PROJECTION_YEAR).unwrap();

        assert_eq!(y2025.common.common_redeemed, 0.0);
        assert_eq!(y2025.grant.redeemed_shares, 0.0);
        assert_eq!(y2025.common.cumulative_common_redemption_value, 0.0);
        assert_eq!(y2025.grant.cumulative_redemption_value, 0.0);
    }

    #[test]
    fn test_underwater_grant_is_worthless() {
        let params = Parameters {
            strike_price: 100.0,
            ..Parameters::reference()
        };
        let ledger = compute(&params).unwrap();
        for record in ledger.iter() {
            assert_eq!(record.grant.redemption_value, 0.0);
            assert_eq!(record.grant.cumulative_redemption_value, 0.0);
            assert_eq!(record.grant.unsold_value, 0.0);
            assert_eq!(record.grant.total_grant_value, 0.0);
        }
        // Redemption still happens; it just realises nothing.
        assert!(ledger.final_record().grant.cumulative_redeemed > 0.0);
    }

    #[test]
    fn test_vested_unsold_floor() {
        // Vesting collapses to zero after redemption has started.
        let mut schedule = VestingSchedule::new();
        for y in Year::projection_years() {
            let vested = if y <= year(2027) { 100_000 } else { 0 };
            schedule.set(y, vested).unwrap();
        }
        let params = Parameters::reference()
            .with_redemption_rates(0.0, 0.10)
            .with_vesting_schedule(schedule);
        let ledger = compute(&params).unwrap();

        let y2028 = ledger.get(year(2028)).unwrap();
        assert_eq!(y2028.grant.vested_unsold_shares, 0.0);
        assert_eq!(y2028.grant.unsold_value, 0.0);

        // Nothing vested-unsold in 2028, so nothing redeemed in 2029.
        let y2029 = ledger.get(year(2029)).unwrap();
        assert_eq!(y2029.grant.redeemed_shares, 0.0);
        assert_relative_eq!(
            y2029.grant.cumulative_redeemed,
            y2028.grant.cumulative_redeemed
        );
    }

    #[test]
    fn test_zero_growth_is_flat() {
        let params = Parameters::reference().with_growth_rate(0.0);
        let ledger = compute(&params).unwrap();
        assert!(ledger.iter().all(|r| r.share_price == 6.0));
        // At-the-money grant never carries value
        assert_eq!(ledger.final_record().grant.total_grant_value, 0.0);
    }

    #[test]
    fn test_negative_growth_computes() {
        let params = Parameters::reference().with_growth_rate(-0.10);
        let ledger = compute(&params).unwrap();
        assert!(ledger.final_record().share_price < 6.0);
        assert_eq!(ledger.final_record().grant.total_grant_value, 0.0);
        assert!(ledger.final_record().common.total_common_value > 0.0);
    }

    #[test]
    fn test_full_redemption_rate_empties_common() {
        let params = Parameters::reference().with_redemption_rates(1.0, 1.0);
        let ledger = compute(&params).unwrap();
        let y2026 = ledger.get(year(2026)).unwrap();
        assert_eq!(y2026.common.unsold_common_shares, 0.0);
        assert_eq!(y2026.common.unsold_common_value, 0.0);
        let y2027 = ledger.get(year(2027)).unwrap();
        assert_eq!(y2027.common.common_redeemed, 0.0);
    }

    #[test]
    fn test_out_of_range_rates_compute() {
        let params = Parameters::reference()
            .with_growth_rate(1.2)
            .with_redemption_rates(1.5, -0.2);
        let ledger = compute(&params).unwrap();

        let y2026 = ledger.get(year(2026)).unwrap();
        assert_relative_eq!(y2026.share_price, 6.0 * 2.2 * 2.2, max_relative = 1e-12);
        assert_relative_eq!(y2026.common.common_redeemed, 45_000.0, epsilon = 1e-9);
        assert_relative_eq!(y2026.common.unsold_common_shares, -15_000.0, epsilon = 1e-9);
        // Negative option rate: 60,000 * -0.2 shares flow back in
        assert_relative_eq!(y2026.grant.redeemed_shares, -12_000.0, epsilon = 1e-9);
        assert_relative_eq!(y2026.grant.vested_unsold_shares, 82_000.0, epsilon = 1e-9);

        let total_common = params.total_common_shares as f64;
        let total_grant = params.total_grant_shares as f64;
        for record in ledger.projection() {
            assert!(record.grant.vested_unsold_shares >= 0.0);
            assert_relative_eq!(
                record.common.unsold_common_shares + record.common.cumulative_common_redeemed,
                total_common,
                max_relative = 1e-9
            );
            assert_relative_eq!(
                record.grant.unsold_shares + record.grant.cumulative_redeemed,
                total_grant,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let params = Parameters {
            total_common_shares: 0,
            ..Parameters::reference()
        };
        assert_eq!(
            compute(&params),
            Err(ValuationError::InvalidParameter(
                ParameterError::NonPositiveShares {
                    field: "total_common_shares",
                    value: 0
                }
            ))
        );
    }

    #[test]
    fn test_strict_mode_rejects_missing_year() {
        let mut schedule = VestingSchedule::default_preset(100_000);
        let mut entries: Vec<(Year, u64)> = schedule.iter().collect();
        entries.retain(|(y, _)| *y != FINAL_YEAR);
        schedule = VestingSchedule::from_entries(entries).unwrap();

        let params = Parameters::reference().with_vesting_schedule(schedule);
        assert_eq!(
            ValuationEngine::strict().compute(&params),
            Err(ValuationError::IncompleteSchedule(
                ScheduleError::MissingYears {
                    years: vec![FINAL_YEAR]
                }
            ))
        );
    }

    #[test]
    fn test_lenient_mode_fills_missing_year() {
        let entries = [(year(2025), 60_000), (year(2029), 100_000)];
        let params = Parameters::reference()
            .with_vesting_schedule(VestingSchedule::from_entries(entries).unwrap());

        let ledger = ValuationEngine::lenient().compute(&params).unwrap();
        assert_relative_eq!(ledger.get(year(2027)).unwrap().grant.vested_shares, 60_000.0);
        assert_relative_eq!(ledger.get(year(2033)).unwrap().grant.vested_shares, 100_000.0);
    }

    #[test]
    fn test_deterministic() {
        let params = Parameters::reference().with_growth_rate(0.17);
        assert_eq!(compute(&params), compute(&params));
    }

    #[test]
    fn test_engine_mode_accessor() {
        assert_eq!(ValuationEngine::default().mode(), ScheduleMode::Strict);
        assert_eq!(ValuationEngine::lenient().mode(), ScheduleMode::Lenient);
    }
}

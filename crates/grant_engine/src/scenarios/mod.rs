//! Scenario execution.
//!
//! Runs the valuation engine over sets of parameter variations:
//! - Redemption-rate grids (same rate for both instruments, or every combination)
//! - Share-price growth comparisons
//!
//! Each scenario is an independent valuation, so sets are evaluated in
//! parallel via [`crate::parallel`] and returned in input order.

mod growth;
mod redemption;

pub use growth::{GrowthSeries, DEFAULT_GROWTH_RATES};
pub use redemption::{
    RedemptionGrid, RedemptionScenario, ScenarioLedger, YearSnapshot, DEFAULT_REDEMPTION_RATES,
};

use crate::error::ValuationError;
use crate::parallel::{try_parallel_map, ParallelConfig};
use crate::valuation::ValuationEngine;
use grant_core::types::{Parameters, Year};
use tracing::debug;

/// Evaluates scenario sets against a base parameter set.
///
/// # Examples
///
/// ```
/// use grant_core::types::{Parameters, Year};
/// use grant_engine::{RedemptionGrid, ScenarioRunner};
///
/// let runner = ScenarioRunner::default();
/// let results = runner
///     .run_redemption_grid(&Parameters::reference(), &RedemptionGrid::default())
///     .unwrap();
/// assert_eq!(results.len(), 5);
///
/// let snapshots = ScenarioRunner::year_snapshots(&results, Year::new(2030)).unwrap();
/// assert_eq!(snapshots[2].label, "5%");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScenarioRunner {
    engine: ValuationEngine,
    parallel: ParallelConfig,
}

impl ScenarioRunner {
    /// Creates a runner with the given engine and parallel configuration.
    pub fn new(engine: ValuationEngine, parallel: ParallelConfig) -> Self {
        Self { engine, parallel }
    }

    /// Valuation engine used for every scenario.
    #[inline]
    pub fn engine(&self) -> &ValuationEngine {
        &self.engine
    }

    /// Values `base` under every scenario in `grid`.
    ///
    /// # Errors
    ///
    /// The first valuation error encountered; `base` is validated up front so
    /// invalid inputs fail before any scenario runs.
    pub fn run_redemption_grid(
        &self,
        base: &Parameters,
        grid: &RedemptionGrid,
    ) -> Result<Vec<ScenarioLedger>, ValuationError> {
        base.validate()?;
        debug!(
            scenarios = grid.len(),
            parallel = self.parallel.should_parallelize(grid.len()),
            "Running redemption grid"
        );

        try_parallel_map(grid.scenarios(), &self.parallel, |scenario| {
            let ledger = self.engine.compute(&scenario.apply(base))?;
            Ok(ScenarioLedger {
                scenario: scenario.clone(),
                ledger,
            })
        })
    }

    /// Combined value paths for each growth rate, keeping `base`'s other inputs.
    ///
    /// # Errors
    ///
    /// The first valuation error encountered.
    pub fn run_growth_comparison(
        &self,
        base: &Parameters,
        growth_rates: &[f64],
    ) -> Result<Vec<GrowthSeries>, ValuationError> {
        base.validate()?;
        debug!(
            rates = growth_rates.len(),
            parallel = self.parallel.should_parallelize(growth_rates.len()),
            "Running growth comparison"
        );

        try_parallel_map(growth_rates, &self.parallel, |&growth_rate| {
            let ledger = self
                .engine
                .compute(&base.clone().with_growth_rate(growth_rate))?;
            Ok(GrowthSeries::from_ledger(growth_rate, &ledger))
        })
    }

    /// Per-scenario snapshot of a single projection year.
    ///
    /// # Errors
    ///
    /// `ValuationError::NotAProjectionYear` unless `year` is 2025-2035.
    pub fn year_snapshots(
        results: &[ScenarioLedger],
        year: Year,
    ) -> Result<Vec<YearSnapshot>, ValuationError> {
        if !year.is_projection() {
            return Err(ValuationError::NotAProjectionYear { year });
        }
        Ok(results
            .iter()
            .filter_map(|result| result.snapshot(year))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::compute;
    use approx::assert_relative_eq;
    use grant_core::types::ParameterError;

    #[test]
    fn test_grid_matches_individual_valuations() {
        let base = Parameters::reference();
        let grid = RedemptionGrid::cross(&[0.0, 0.05], &[0.03, 0.10]);
        let results = ScenarioRunner::default()
            .run_redemption_grid(&base, &grid)
            .unwrap();

        assert_eq!(results.len(), 4);
        for (result, scenario) in results.iter().zip(grid.scenarios()) {
            assert_eq!(&result.scenario, scenario);
            assert_eq!(result.ledger, compute(&scenario.apply(&base)).unwrap());
        }
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let base = Parameters::reference();
        let grid = RedemptionGrid::default();
        let seq = ScenarioRunner::new(ValuationEngine::strict(), ParallelConfig::sequential())
            .run_redemption_grid(&base, &grid)
            .unwrap();
        let par = ScenarioRunner::new(ValuationEngine::strict(), ParallelConfig::new(1))
            .run_redemption_grid(&base, &grid)
            .unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn test_zero_rate_scenario_has_no_redemption_value() {
        let results = ScenarioRunner::default()
            .run_redemption_grid(&Parameters::reference(), &RedemptionGrid::same_rates(&[0.0]))
            .unwrap();
        let final_record = results[0].ledger.final_record();
        assert_eq!(final_record.common.cumulative_common_redemption_value, 0.0);
        assert_eq!(final_record.grant.cumulative_redemption_value, 0.0);
    }

    #[test]
    fn test_invalid_base_fails_before_running() {
        let base = Parameters {
            common_purchase_price: 0.0,
            ..Parameters::reference()
        };
        let err = ScenarioRunner::default()
            .run_redemption_grid(&base, &RedemptionGrid::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ValuationError::InvalidParameter(ParameterError::NonPositivePrice { .. })
        ));
    }

    #[test]
    fn test_growth_comparison_orders_by_rate() {
        let series = ScenarioRunner::default()
            .run_growth_comparison(&Parameters::reference(), &DEFAULT_GROWTH_RATES)
            .unwrap();
        assert_eq!(series.len(), 4);
        assert_eq!(series[0].label, "10% Growth");
        assert_eq!(series[3].label, "25% Growth");

        // Higher growth dominates in the final year
        let finals: Vec<f64> = series
            .iter()
            .map(|s| s.value_at(Year::new(2035)).unwrap())
            .collect();
        assert!(finals.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_growth_comparison_matches_base_rate() {
        let base = Parameters::reference();
        let series = ScenarioRunner::default()
            .run_growth_comparison(&base, &[base.growth_rate])
            .unwrap();
        let ledger = compute(&base).unwrap();
        assert_relative_eq!(
            series[0].value_at(Year::new(2031)).unwrap(),
            ledger.combined_total_value(Year::new(2031)).unwrap()
        );
    }

    #[test]
    fn test_year_snapshots() {
        let results = ScenarioRunner::default()
            .run_redemption_grid(&Parameters::reference(), &RedemptionGrid::default())
            .unwrap();
        let snapshots = ScenarioRunner::year_snapshots(&results, Year::new(2028)).unwrap();
        assert_eq!(snapshots.len(), 5);
        for (snapshot, result) in snapshots.iter().zip(&results) {
            let record = result.ledger.get(Year::new(2028)).unwrap();
            assert_eq!(snapshot.label, result.scenario.label);
            assert_eq!(snapshot.share_price, record.share_price);
            assert_eq!(Some(snapshot.combined_total_value), record.combined_total_value);
        }
    }

    #[test]
    fn test_year_snapshots_reject_seed_year() {
        assert_eq!(
            ScenarioRunner::year_snapshots(&[], Year::new(2024)),
            Err(ValuationError::NotAProjectionYear {
                year: Year::new(2024)
            })
        );
    }
}

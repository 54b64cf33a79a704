//! L1/L2 integration tests for grant_engine.
//!
//! Exercises the engine through its public surface only, with inputs built
//! from grant_core types.

use approx::assert_relative_eq;
use grant_core::schedule::{ScheduleMode, VestingSchedule};
use grant_core::types::{Parameters, ScheduleError, Year, FINAL_YEAR};
use grant_engine::{
    compute, ChartSeries, ParallelConfig, RedemptionGrid, ScenarioRunner, ValuationEngine,
    ValuationError, DEFAULT_GROWTH_RATES,
};

// =============================================================================
// Reference scenario
// =============================================================================

#[test]
fn test_reference_2026_row() {
    let ledger = compute(&Parameters::reference()).unwrap();

    let y2025 = ledger.get(Year::new(2025)).unwrap();
    assert_relative_eq!(y2025.share_price, 7.20, epsilon = 1e-12);

    let y2026 = ledger.get(Year::new(2026)).unwrap();
    assert_relative_eq!(y2026.share_price, 8.64, epsilon = 1e-12);
    assert_relative_eq!(y2026.common.common_redeemed, 1_500.0, epsilon = 1e-9);
    assert_relative_eq!(y2026.common.common_redemption_value, 9_960.0, epsilon = 1e-6);
    assert_relative_eq!(y2026.grant.redeemed_shares, 3_000.0, epsilon = 1e-9);
    assert_relative_eq!(y2026.grant.redemption_value, 7_920.0, epsilon = 1e-6);
}

#[test]
fn test_underwater_grant_scenario() {
    let params = Parameters {
        strike_price: 100.0,
        ..Parameters::reference()
    };
    let ledger = compute(&params).unwrap();
    for record in ledger.projection() {
        assert_eq!(record.grant.redemption_value, 0.0);
        assert_eq!(record.grant.cumulative_redemption_value, 0.0);
        assert_eq!(record.grant.unsold_value, 0.0);
        assert_eq!(record.grant.total_grant_value, 0.0);
    }
    // Common branch is unaffected
    assert!(ledger.final_record().common.total_common_value > 0.0);
}

#[test]
fn test_ledger_covers_full_horizon() {
    let ledger = compute(&Parameters::reference()).unwrap();
    let years: Vec<Year> = ledger.iter().map(|r| r.year).collect();
    let expected: Vec<Year> = Year::ledger_years().collect();
    assert_eq!(years, expected);
    assert_eq!(ledger.final_record().year, FINAL_YEAR);
}

// =============================================================================
// Schedule modes
// =============================================================================

#[test]
fn test_strict_and_lenient_on_sparse_schedule() {
    let sparse = VestingSchedule::from_entries([
        (Year::new(2025), 60_000),
        (Year::new(2027), 80_000),
    ])
    .unwrap();
    let params = Parameters::reference().with_vesting_schedule(sparse);

    match compute(&params) {
        Err(ValuationError::IncompleteSchedule(ScheduleError::MissingYears { years })) => {
            assert_eq!(years.len(), 9);
            assert_eq!(years[0], Year::new(2026));
        }
        other => panic!("expected missing years, got {:?}", other),
    }

    let ledger = ValuationEngine::new(ScheduleMode::Lenient)
        .compute(&params)
        .unwrap();
    assert_eq!(ledger.get(Year::new(2026)).unwrap().grant.vested_shares, 60_000.0);
    assert_eq!(ledger.final_record().grant.vested_shares, 80_000.0);
}

// =============================================================================
// Scenario sets
// =============================================================================

#[test]
fn test_redemption_grid_end_to_end() {
    let runner = ScenarioRunner::new(ValuationEngine::strict(), ParallelConfig::new(2));
    let grid = RedemptionGrid::cross(&[0.0, 0.05, 0.10], &[0.0, 0.05]);
    let results = runner
        .run_redemption_grid(&Parameters::reference(), &grid)
        .unwrap();
    assert_eq!(results.len(), 6);

    let snapshots = ScenarioRunner::year_snapshots(&results, Year::new(2030)).unwrap();
    assert_eq!(snapshots.len(), 6);
    assert_eq!(snapshots[0].label, "Common 0% / Options 0%");
    assert_eq!(snapshots[5].label, "Common 10% / Options 5%");
    for snapshot in &snapshots {
        assert_relative_eq!(
            snapshot.combined_total_value,
            snapshot.total_common_value + snapshot.total_grant_value,
            max_relative = 1e-12
        );
    }
}

#[test]
fn test_growth_comparison_feeds_chart() {
    let series = ScenarioRunner::default()
        .run_growth_comparison(&Parameters::reference(), &DEFAULT_GROWTH_RATES)
        .unwrap();
    let chart = ChartSeries::growth(&series);
    let names: Vec<&str> = chart.lines.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["10% Growth", "15% Growth", "20% Growth", "25% Growth"]
    );
    assert!(chart.lines.iter().all(|l| l.points.len() == 10));
}

#[cfg(feature = "serde")]
#[test]
fn test_scenario_results_serialize() {
    let results = ScenarioRunner::default()
        .run_redemption_grid(&Parameters::reference(), &RedemptionGrid::same_rates(&[0.05]))
        .unwrap();
    let json = serde_json::to_string(&results[0]).unwrap();
    assert!(json.contains("\"label\":\"5%\""));
    assert!(json.contains("\"combined_total_value\":null"));

    let back: grant_engine::ScenarioLedger = serde_json::from_str(&json).unwrap();
    assert_eq!(back.scenario, results[0].scenario);
    assert_eq!(back.ledger.len(), 12);
}

#[cfg(feature = "serde")]
#[test]
fn test_scenario_results_reject_truncated_ledger() {
    let results = ScenarioRunner::default()
        .run_redemption_grid(&Parameters::reference(), &RedemptionGrid::same_rates(&[0.05]))
        .unwrap();
    let mut value = serde_json::to_value(&results[0]).unwrap();
    value["ledger"]["records"].as_array_mut().unwrap().truncate(3);

    let parsed: Result<grant_engine::ScenarioLedger, _> = serde_json::from_value(value);
    assert!(parsed.is_err());
}

//! Rates command implementation
//!
//! Runs a redemption-rate grid and compares the combined value of every
//! scenario, with an optional CSV snapshot of one year.

use super::{Context, RateOverrides};
use crate::export::{snapshot_file_name, write_snapshot_csv};
use crate::format::{format_currency, format_thousands, Table};
use crate::{CliError, Result};
use grant_core::types::Year;
use grant_engine::{RedemptionGrid, ScenarioLedger, ScenarioRunner, YearSnapshot};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

/// Arguments of the rates command, rates as fractions.
#[derive(Debug, Clone, PartialEq)]
pub struct RatesArgs {
    /// Common (or shared) redemption rates
    pub rates: Vec<f64>,
    /// Separate option rates; crossed with `rates` when given
    pub option_rates: Option<Vec<f64>>,
    /// Snapshot year
    pub year: Year,
    /// Growth-rate override
    pub growth_rate: Option<f64>,
}

/// Grid for `args`.
///
/// With `same_rates` and no option rates each rate applies to both
/// instruments; otherwise every common rate is paired with every option
/// rate (the common rates double as option rates when none are given).
pub fn build_grid(args: &RatesArgs, same_rates: bool) -> RedemptionGrid {
    match (&args.option_rates, same_rates) {
        (None, true) => RedemptionGrid::same_rates(&args.rates),
        (None, false) => RedemptionGrid::cross(&args.rates, &args.rates),
        (Some(option_rates), _) => RedemptionGrid::cross(&args.rates, option_rates),
    }
}

/// Runs the grid and returns scenario ledgers plus the year snapshot.
pub fn evaluate(
    ctx: &Context,
    args: &RatesArgs,
) -> Result<(Vec<ScenarioLedger>, Vec<YearSnapshot>)> {
    if !args.year.is_projection() {
        return Err(CliError::invalid_argument(format!(
            "year {} is outside 2025-2035",
            args.year
        )));
    }

    let base = ctx.parameters(RateOverrides {
        growth_rate: args.growth_rate,
        ..RateOverrides::default()
    })?;
    let grid = build_grid(args, ctx.config().same_rates);
    info!(scenarios = grid.len(), year = %args.year, "Running redemption grid");

    let results = ctx.runner().run_redemption_grid(&base, &grid)?;
    let snapshots = ScenarioRunner::year_snapshots(&results, args.year)?;
    Ok((results, snapshots))
}

/// Renders the comparison and snapshot tables.
pub fn render(ctx: &Context, results: &[ScenarioLedger], snapshots: &[YearSnapshot]) -> String {
    let symbol = ctx.currency();

    let mut headers = vec!["Scenario".to_string()];
    headers.extend(Year::redemption_years().map(|y| y.to_string()));
    let mut comparison = Table::new(headers);
    for result in results {
        let mut row = vec![result.scenario.label.clone()];
        row.extend(Year::redemption_years().map(|year| {
            let value = result.ledger.combined_total_value(year).unwrap_or_default();
            format_thousands(value, symbol)
        }));
        comparison.push_row(row);
    }

    let mut snapshot_table = Table::new([
        "Redemption Rate",
        "Share Price",
        "Common Share Value",
        "A-Share/Options Value",
        "Combined Value",
    ]);
    for snapshot in snapshots {
        snapshot_table.push_row(vec![
            snapshot.label.clone(),
            format_currency(snapshot.share_price, symbol),
            format_currency(snapshot.total_common_value, symbol),
            format_currency(snapshot.total_grant_value, symbol),
            format_currency(snapshot.combined_total_value, symbol),
        ]);
    }

    let year = snapshots
        .first()
        .map(|s| s.year.to_string())
        .unwrap_or_default();
    format!(
        "Combined Value by Redemption Rate\n\n{}\nScenarios in {}\n\n{}",
        comparison.render(),
        year,
        snapshot_table.render()
    )
}

/// Writes the snapshot CSV to `output`, or to `grants_{year}.csv` when `None`.
pub fn write_snapshot(
    snapshots: &[YearSnapshot],
    year: Year,
    output: Option<&Path>,
) -> Result<PathBuf> {
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(snapshot_file_name(year)));
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(&path)?;
    write_snapshot_csv(BufWriter::new(file), snapshots)?;
    info!(path = %path.display(), rows = snapshots.len(), "Snapshot exported");
    Ok(path)
}

/// Run the rates command.
///
/// `output` is `Some(None)` when `--output` was given without a path.
pub fn run(ctx: &Context, args: &RatesArgs, output: Option<Option<&Path>>) -> Result<()> {
    let (results, snapshots) = evaluate(ctx, args)?;
    println!("{}", render(ctx, &results, &snapshots));
    if let Some(path) = output {
        write_snapshot(&snapshots, args.year, path)?;
    }
    Ok(())
}

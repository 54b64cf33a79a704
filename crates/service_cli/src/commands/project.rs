//! Project command implementation
//!
//! Prints the 2025-2035 projection tables for one parameter set.

use super::{Context, RateOverrides};
use crate::format::{format_currency, format_number, format_percent, Table};
use crate::Result;
use clap::ValueEnum;
use grant_core::ledger::Ledger;
use grant_core::types::Parameters;
use grant_engine::ChartSeries;
use serde::Serialize;
use tracing::info;

/// Which tables to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum View {
    /// Common shares only
    Common,
    /// Options/A-shares only
    Options,
    /// Both holdings and their sum
    Combined,
    /// All three tables
    #[default]
    All,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text tables
    #[default]
    Table,
    /// Parameters, ledger and chart series as JSON
    Json,
}

/// JSON document emitted by `--format json`.
#[derive(Debug, Serialize)]
pub struct ProjectionReport<'a> {
    /// Inputs used
    pub parameters: &'a Parameters,
    /// Full 2024-2035 ledger
    pub ledger: &'a Ledger,
    /// Thousands-scaled chart series
    pub charts: Vec<ChartSeries>,
}

fn common_table(ledger: &Ledger, symbol: &str) -> Table {
    let mut table = Table::new([
        "Year",
        "Share Price",
        "Proceeds from Redemption",
        "Value of Unsold Shares",
        "Total Common Share Value",
    ]);
    for record in ledger.projection() {
        table.push_row(vec![
            record.year.to_string(),
            format_currency(record.share_price, symbol),
            format_currency(record.common.cumulative_common_redemption_value, symbol),
            format_currency(record.common.unsold_common_value, symbol),
            format_currency(record.common.total_common_value, symbol),
        ]);
    }
    table
}

fn options_table(ledger: &Ledger, symbol: &str) -> Table {
    let mut table = Table::new([
        "Year",
        "Share Price",
        "Vested Shares",
        "Proceeds from Redemption",
        "Value of Unsold Shares",
        "Total A-Share/Options Value",
    ]);
    for record in ledger.projection() {
        table.push_row(vec![
            record.year.to_string(),
            format_currency(record.share_price, symbol),
            format_number(record.grant.vested_shares, 0),
            format_currency(record.grant.cumulative_redemption_value, symbol),
            format_currency(record.grant.unsold_value, symbol),
            format_currency(record.grant.total_grant_value, symbol),
        ]);
    }
    table
}

fn combined_table(ledger: &Ledger, symbol: &str) -> Table {
    let mut table = Table::new([
        "Year",
        "Share Price",
        "Common Share Value",
        "A-Share/Options Value",
        "Combined Total Value",
    ]);
    for record in ledger.projection() {
        table.push_row(vec![
            record.year.to_string(),
            format_currency(record.share_price, symbol),
            format_currency(record.common.total_common_value, symbol),
            format_currency(record.grant.total_grant_value, symbol),
            format_currency(record.combined_total_value.unwrap_or_default(), symbol),
        ]);
    }
    table
}

/// Renders the selected view in the selected format.
pub fn render(
    ctx: &Context,
    overrides: RateOverrides,
    view: View,
    format: OutputFormat,
) -> Result<String> {
    let params = ctx.parameters(overrides)?;
    let ledger = ctx.engine().compute(&params)?;
    info!(
        growth_rate = params.growth_rate,
        common_rate = params.common_redemption_rate,
        option_rate = params.option_redemption_rate,
        "Projection computed"
    );

    if format == OutputFormat::Json {
        let report = ProjectionReport {
            parameters: &params,
            ledger: &ledger,
            charts: vec![
                ChartSeries::common(&ledger),
                ChartSeries::grant(&ledger),
                ChartSeries::combined(&ledger),
            ],
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let symbol = ctx.currency();
    let growth = format_percent(params.growth_rate);
    let mut sections = Vec::new();

    if matches!(view, View::Common | View::All) {
        sections.push(format!(
            "Common Share Grant Value\nRedemption Rate: {}, PBT Growth: {}\n\n{}",
            format_percent(params.common_redemption_rate),
            growth,
            common_table(&ledger, symbol).render()
        ));
    }
    if matches!(view, View::Options | View::All) {
        sections.push(format!(
            "A-Share/Options Grant Value\nRedemption Rate: {}, PBT Growth: {}\n\n{}",
            format_percent(params.option_redemption_rate),
            growth,
            options_table(&ledger, symbol).render()
        ));
    }
    if matches!(view, View::Combined | View::All) {
        sections.push(format!(
            "Combined Grant Value\nRedemptions: Common {} / Options {}, PBT Growth: {}\n\n{}",
            format_percent(params.common_redemption_rate),
            format_percent(params.option_redemption_rate),
            growth,
            combined_table(&ledger, symbol).render()
        ));
    }

    Ok(sections.join("\n"))
}

/// Run the project command
pub fn run(
    ctx: &Context,
    overrides: RateOverrides,
    view: View,
    format: OutputFormat,
) -> Result<()> {
    println!("{}", render(ctx, overrides, view, format)?);
    Ok(())
}

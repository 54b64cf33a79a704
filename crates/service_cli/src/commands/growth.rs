//! Growth command implementation
//!
//! Compares the combined value path under several share-price growth rates.

use super::{Context, RateOverrides};
use crate::format::{format_number, format_percent, Table};
use crate::Result;
use grant_core::types::Year;
use grant_engine::ChartSeries;
use tracing::info;

/// Renders the growth comparison in thousands.
///
/// With `no_redemption` both redemption rates are pinned to zero so only
/// growth differs between the lines.
pub fn render(ctx: &Context, growth_rates: &[f64], no_redemption: bool) -> Result<String> {
    let mut base = ctx.parameters(RateOverrides::default())?;
    if no_redemption {
        base = base.with_redemption_rates(0.0, 0.0);
    }

    let series = ctx.runner().run_growth_comparison(&base, growth_rates)?;
    info!(rates = series.len(), no_redemption, "Growth comparison computed");
    let chart = ChartSeries::growth(&series);

    let mut headers = vec!["Year".to_string()];
    headers.extend(chart.lines.iter().map(|line| line.name.clone()));
    let mut table = Table::new(headers);
    for year in Year::redemption_years() {
        let mut row = vec![year.to_string()];
        row.extend(chart.lines.iter().map(|line| {
            line.value_at(year)
                .map(|value| format_number(value, 1))
                .unwrap_or_default()
        }));
        table.push_row(row);
    }

    Ok(format!(
        "{} ({} thousands)\nRedemptions: Common {} / Options {}\n\n{}",
        chart.title,
        ctx.currency(),
        format_percent(base.common_redemption_rate),
        format_percent(base.option_redemption_rate),
        table.render()
    ))
}

/// Run the growth command
pub fn run(ctx: &Context, growth_rates: &[f64], no_redemption: bool) -> Result<()> {
    println!("{}", render(ctx, growth_rates, no_redemption)?);
    Ok(())
}

//! CSV export of ledgers and year snapshots.

use crate::format::format_percent;
use crate::Result;
use grant_core::ledger::Ledger;
use grant_core::types::{Parameters, Year};
use grant_engine::YearSnapshot;
use std::io::Write;

/// Column headers of the full-ledger export.
pub const LEDGER_HEADERS: [&str; 9] = [
    "Year",
    "Share Price",
    "Common Redemption Value",
    "Common Unsold Value",
    "Total Common Value",
    "Options Redemption Value",
    "Options Unsold Value",
    "Total Options Value",
    "Combined Total Value",
];

/// Column headers of the year-snapshot export.
pub const SNAPSHOT_HEADERS: [&str; 5] = [
    "Redemption Rate",
    "Share Price",
    "Common Share Value",
    "A-Share/Options Value",
    "Combined Value",
];

/// Writes one row per projection year 2025-2035.
///
/// Redemption columns hold cumulative proceeds.
pub fn write_ledger_csv<W: Write>(writer: W, ledger: &Ledger) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(LEDGER_HEADERS)?;

    for record in ledger.projection() {
        let combined = record.combined_total_value.unwrap_or_default();
        csv.write_record([
            record.year.to_string(),
            record.share_price.to_string(),
            record.common.cumulative_common_redemption_value.to_string(),
            record.common.unsold_common_value.to_string(),
            record.common.total_common_value.to_string(),
            record.grant.cumulative_redemption_value.to_string(),
            record.grant.unsold_value.to_string(),
            record.grant.total_grant_value.to_string(),
            combined.to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Writes one row per scenario snapshot.
pub fn write_snapshot_csv<W: Write>(writer: W, snapshots: &[YearSnapshot]) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(SNAPSHOT_HEADERS)?;

    for snapshot in snapshots {
        csv.write_record([
            snapshot.label.clone(),
            snapshot.share_price.to_string(),
            snapshot.total_common_value.to_string(),
            snapshot.total_grant_value.to_string(),
            snapshot.combined_total_value.to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// `grants_pbt_{growth}_common_{common}_options_{option}.csv` with whole percentages.
pub fn default_file_name(params: &Parameters) -> String {
    let pct = |rate: f64| format_percent(rate).trim_end_matches('%').to_string();
    format!(
        "grants_pbt_{}_common_{}_options_{}.csv",
        pct(params.growth_rate),
        pct(params.common_redemption_rate),
        pct(params.option_redemption_rate)
    )
}

/// `grants_{year}.csv`
pub fn snapshot_file_name(year: Year) -> String {
    format!("grants_{}.csv", year)
}

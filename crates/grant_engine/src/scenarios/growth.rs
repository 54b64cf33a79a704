//! Share-price growth comparison.

use super::redemption::percent_label;
use grant_core::ledger::Ledger;
use grant_core::types::Year;

/// Default growth rates for comparison.
pub const DEFAULT_GROWTH_RATES: [f64; 4] = [0.10, 0.15, 0.20, 0.25];

/// Combined value path under one growth rate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthSeries {
    /// Display label, e.g. `"20% Growth"`
    pub label: String,
    /// Growth rate used
    pub growth_rate: f64,
    /// Combined total value for each redemption year 2026-2035
    pub combined: Vec<(Year, f64)>,
}

impl GrowthSeries {
    /// Extracts the 2026-2035 combined values from a ledger.
    pub fn from_ledger(growth_rate: f64, ledger: &Ledger) -> Self {
        let combined = Year::redemption_years()
            .filter_map(|year| ledger.combined_total_value(year).map(|value| (year, value)))
            .collect();
        Self {
            label: format!("{} Growth", percent_label(growth_rate)),
            growth_rate,
            combined,
        }
    }

    /// Combined value in `year`, if covered.
    pub fn value_at(&self, year: Year) -> Option<f64> {
        self.combined
            .iter()
            .find(|(y, _)| *y == year)
            .map(|(_, value)| *value)
    }
}

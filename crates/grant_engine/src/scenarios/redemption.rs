//! Redemption-rate scenarios.

use grant_core::ledger::Ledger;
use grant_core::types::{Parameters, Year};

/// Default redemption-rate menu.
pub const DEFAULT_REDEMPTION_RATES: [f64; 5] = [0.00, 0.03, 0.05, 0.08, 0.10];

/// Formats a fractional rate as a whole percentage, e.g. `0.05` -> `"5%"`.
pub(crate) fn percent_label(rate: f64) -> String {
    format!("{}%", (rate * 100.0).round() as i64)
}

/// One pair of redemption rates with a display label.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RedemptionScenario {
    /// Display label
    pub label: String,
    /// Common-share redemption rate
    pub common_rate: f64,
    /// Option/A-share redemption rate
    pub option_rate: f64,
}

impl RedemptionScenario {
    /// Same rate for both instruments, labelled `"5%"`.
    pub fn same_rate(rate: f64) -> Self {
        Self {
            label: percent_label(rate),
            common_rate: rate,
            option_rate: rate,
        }
    }

    /// Separate rates, labelled `"Common 5% / Options 3%"`.
    pub fn split(common_rate: f64, option_rate: f64) -> Self {
        Self {
            label: format!(
                "Common {} / Options {}",
                percent_label(common_rate),
                percent_label(option_rate)
            ),
            common_rate,
            option_rate,
        }
    }

    /// `base` with this scenario's redemption rates.
    pub fn apply(&self, base: &Parameters) -> Parameters {
        base.clone()
            .with_redemption_rates(self.common_rate, self.option_rate)
    }
}

/// Ordered set of redemption scenarios.
///
/// An empty rate list falls back to a single 0% scenario so a grid is
/// never empty.
///
/// # Examples
///
/// ```
/// use grant_engine::RedemptionGrid;
///
/// let grid = RedemptionGrid::cross(&[0.03, 0.05], &[0.0, 0.10]);
/// assert_eq!(grid.len(), 4);
/// assert_eq!(grid.scenarios()[1].label, "Common 3% / Options 10%");
///
/// let fallback = RedemptionGrid::same_rates(&[]);
/// assert_eq!(fallback.scenarios()[0].label, "0%");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RedemptionGrid {
    scenarios: Vec<RedemptionScenario>,
}

impl RedemptionGrid {
    /// One scenario per rate, applied to both instruments.
    pub fn same_rates(rates: &[f64]) -> Self {
        let scenarios = non_empty(rates)
            .iter()
            .copied()
            .map(RedemptionScenario::same_rate)
            .collect();
        Self { scenarios }
    }

    /// Every combination of a common rate with an option rate, common-major.
    pub fn cross(common_rates: &[f64], option_rates: &[f64]) -> Self {
        let option_rates = non_empty(option_rates);
        let scenarios = non_empty(common_rates)
            .iter()
            .flat_map(|&common| {
                option_rates
                    .iter()
                    .map(move |&option| RedemptionScenario::split(common, option))
            })
            .collect();
        Self { scenarios }
    }

    /// Scenarios in evaluation order.
    #[inline]
    pub fn scenarios(&self) -> &[RedemptionScenario] {
        &self.scenarios
    }

    /// Number of scenarios.
    #[inline]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Never true for grids built with the provided constructors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl Default for RedemptionGrid {
    fn default() -> Self {
        Self::same_rates(&DEFAULT_REDEMPTION_RATES)
    }
}

fn non_empty(rates: &[f64]) -> &[f64] {
    if rates.is_empty() {
        &[0.0]
    } else {
        rates
    }
}

/// A scenario together with its computed ledger.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioLedger {
    /// The scenario that produced the ledger
    pub scenario: RedemptionScenario,
    /// Computed ledger
    pub ledger: Ledger,
}

impl ScenarioLedger {
    /// Headline figures for `year`; `None` unless `year` is 2025-2035.
    pub fn snapshot(&self, year: Year) -> Option<YearSnapshot> {
        let record = self.ledger.get(year)?;
        let combined_total_value = record.combined_total_value?;
        Some(YearSnapshot {
            label: self.scenario.label.clone(),
            year,
            share_price: record.share_price,
            total_common_value: record.common.total_common_value,
            total_grant_value: record.grant.total_grant_value,
            combined_total_value,
        })
    }
}

/// One scenario's figures for a single year.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearSnapshot {
    /// Scenario label
    pub label: String,
    /// Snapshot year
    pub year: Year,
    /// Share price in that year
    pub share_price: f64,
    /// Common-share total value
    pub total_common_value: f64,
    /// Option/A-share total value
    pub total_grant_value: f64,
    /// Combined value
    pub combined_total_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_label_rounds() {
        assert_eq!(percent_label(0.05), "5%");
        assert_eq!(percent_label(0.29), "29%");
        assert_eq!(percent_label(0.0), "0%");
    }

    #[test]
    fn test_default_grid() {
        let grid = RedemptionGrid::default();
        let labels: Vec<&str> = grid.scenarios().iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["0%", "3%", "5%", "8%", "10%"]);
        assert!(grid
            .scenarios()
            .iter()
            .all(|s| s.common_rate == s.option_rate));
    }

    #[test]
    fn test_cross_grid_order() {
        let grid = RedemptionGrid::cross(&[0.0, 0.05], &[0.03, 0.08]);
        let pairs: Vec<(f64, f64)> = grid
            .scenarios()
            .iter()
            .map(|s| (s.common_rate, s.option_rate))
            .collect();
        assert_eq!(pairs, vec![(0.0, 0.03), (0.0, 0.08), (0.05, 0.03), (0.05, 0.08)]);
    }

    #[test]
    fn test_cross_with_empty_side_falls_back() {
        let grid = RedemptionGrid::cross(&[0.05], &[]);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.scenarios()[0].label, "Common 5% / Options 0%");
    }

    #[test]
    fn test_apply_only_touches_rates() {
        let base = Parameters::reference();
        let applied = RedemptionScenario::split(0.02, 0.07).apply(&base);
        assert_eq!(applied.common_redemption_rate, 0.02);
        assert_eq!(applied.option_redemption_rate, 0.07);
        assert_eq!(applied.growth_rate, base.growth_rate);
        assert_eq!(applied.vesting_schedule, base.vesting_schedule);
    }
}

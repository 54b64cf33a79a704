//! Chart-ready series in thousands.
//!
//! Each chart covers the redemption years 2026-2035 and plots values
//! divided by 1000.

use crate::scenarios::GrowthSeries;
use grant_core::ledger::{Ledger, YearRecord};
use grant_core::types::Year;

const THOUSAND: f64 = 1_000.0;

/// One named line of a chart.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesLine {
    /// Legend label
    pub name: String,
    /// `(year, value in thousands)` points in year order
    pub points: Vec<(Year, f64)>,
}

impl SeriesLine {
    fn from_ledger(name: &str, ledger: &Ledger, value: impl Fn(&YearRecord) -> f64) -> Self {
        let points = Year::redemption_years()
            .filter_map(|year| ledger.get(year).map(|record| (year, value(record) / THOUSAND)))
            .collect();
        Self {
            name: name.to_string(),
            points,
        }
    }

    /// Value plotted for `year`, if any.
    pub fn value_at(&self, year: Year) -> Option<f64> {
        self.points
            .iter()
            .find(|(y, _)| *y == year)
            .map(|(_, value)| *value)
    }
}

/// A titled set of lines.
///
/// # Examples
///
/// ```
/// use grant_core::types::{Parameters, Year};
/// use grant_engine::{compute, ChartSeries};
///
/// let ledger = compute(&Parameters::reference()).unwrap();
/// let chart = ChartSeries::combined(&ledger);
///
/// assert_eq!(chart.lines.len(), 3);
/// assert_eq!(chart.lines[2].name, "Combined Total Value");
/// assert_eq!(chart.lines[2].points.first().map(|(y, _)| *y), Some(Year::new(2026)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartSeries {
    /// Chart title
    pub title: String,
    /// Lines in legend order
    pub lines: Vec<SeriesLine>,
}

impl ChartSeries {
    /// Common-share proceeds, unsold value and total.
    pub fn common(ledger: &Ledger) -> Self {
        Self {
            title: "Common Share Value Projection".to_string(),
            lines: vec![
                SeriesLine::from_ledger("Proceeds from Redemption", ledger, |r| {
                    r.common.cumulative_common_redemption_value
                }),
                SeriesLine::from_ledger("Value of Unsold Shares", ledger, |r| {
                    r.common.unsold_common_value
                }),
                SeriesLine::from_ledger("Total Value", ledger, |r| r.common.total_common_value),
            ],
        }
    }

    /// Option/A-share proceeds, unsold value and total.
    pub fn grant(ledger: &Ledger) -> Self {
        Self {
            title: "A-Share/Options Value Projection".to_string(),
            lines: vec![
                SeriesLine::from_ledger("Proceeds from Redemption", ledger, |r| {
                    r.grant.cumulative_redemption_value
                }),
                SeriesLine::from_ledger("Value of Unsold Shares", ledger, |r| {
                    r.grant.unsold_value
                }),
                SeriesLine::from_ledger("Total Value", ledger, |r| r.grant.total_grant_value),
            ],
        }
    }

    /// Both holdings and their sum.
    pub fn combined(ledger: &Ledger) -> Self {
        Self {
            title: "Combined Value Projection".to_string(),
            lines: vec![
                SeriesLine::from_ledger("Common Share Value", ledger, |r| {
                    r.common.total_common_value
                }),
                SeriesLine::from_ledger("A-Share/Options Value", ledger, |r| {
                    r.grant.total_grant_value
                }),
                SeriesLine::from_ledger("Combined Total Value", ledger, |r| {
                    r.combined_total_value.unwrap_or_default()
                }),
            ],
        }
    }

    /// One line per growth rate.
    pub fn growth(series: &[GrowthSeries]) -> Self {
        Self {
            title: "Combined Value by Growth Rate".to_string(),
            lines: series
                .iter()
                .map(|s| SeriesLine {
                    name: s.label.clone(),
                    points: s
                        .combined
                        .iter()
                        .map(|&(year, value)| (year, value / THOUSAND))
                        .collect(),
                })
                .collect(),
        }
    }

    /// Looks up a line by legend label.
    pub fn line(&self, name: &str) -> Option<&SeriesLine> {
        self.lines.iter().find(|line| line.name == name)
    }
}

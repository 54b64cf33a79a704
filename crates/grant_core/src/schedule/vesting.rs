//! VestingSchedule implementation.

use super::advisory::VestingAdvisory;
use super::mode::ScheduleMode;
use crate::types::{ScheduleError, Year, PROJECTION_YEARS};
use std::collections::BTreeMap;

/// Explicit entries of the reference vesting preset (year, cumulative vested shares).
pub const DEFAULT_VESTING_PRESET: [(u16, u64); 5] = [
    (2025, 60_000),
    (2026, 70_000),
    (2027, 80_000),
    (2028, 90_000),
    (2029, 100_000),
];

/// Vested count used by the preset for every year after the last explicit entry.
pub const FULLY_VESTED_COUNT: u64 = 100_000;

/// Cumulative vested-share counts per projection year.
///
/// Entries are restricted to the projection years 2025-2035 and kept in
/// chronological order. A schedule need not be complete; completeness is
/// enforced (or papered over) at lookup time by [`ScheduleMode`].
///
/// Counts are expected to be non-decreasing, but that is only reported via
/// [`VestingSchedule::advisories`], never enforced.
///
/// # Examples
///
/// ```
/// use grant_core::schedule::{ScheduleMode, VestingSchedule};
/// use grant_core::types::Year;
///
/// let mut schedule = VestingSchedule::new();
/// schedule.set(Year::new(2025), 50_000).unwrap();
/// schedule.set(Year::new(2028), 75_000).unwrap();
///
/// assert_eq!(schedule.vested_for(Year::new(2027), ScheduleMode::Lenient), Ok(50_000));
/// assert!(schedule.vested_for(Year::new(2027), ScheduleMode::Strict).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "BTreeMap<Year, u64>", try_from = "BTreeMap<Year, u64>")
)]
pub struct VestingSchedule {
    entries: BTreeMap<Year, u64>,
}

impl VestingSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard vesting schedule, capped at `total_grant_shares`.
    ///
    /// 60k, 70k, 80k, 90k vested over 2025-2028, then 100k from 2029 onwards.
    pub fn default_preset(total_grant_shares: u64) -> Self {
        let entries = Year::projection_years()
            .map(|year| {
                let vested = DEFAULT_VESTING_PRESET
                    .iter()
                    .find(|(y, _)| *y == year.value())
                    .map_or(FULLY_VESTED_COUNT, |(_, v)| *v);
                (year, vested.min(total_grant_shares))
            })
            .collect();
        Self { entries }
    }

    /// Builds a schedule from `(year, vested)` pairs.
    ///
    /// Later duplicates overwrite earlier ones.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::YearOutOfRange` for any year outside 2025-2035.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Year, u64)>,
    ) -> Result<Self, ScheduleError> {
        let mut schedule = Self::new();
        for (year, vested) in entries {
            schedule.set(year, vested)?;
        }
        Ok(schedule)
    }

    /// Sets the vested count for `year`, returning the previous entry.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::YearOutOfRange` for any year outside 2025-2035.
    pub fn set(&mut self, year: Year, vested: u64) -> Result<Option<u64>, ScheduleError> {
        if !year.is_projection() {
            return Err(ScheduleError::YearOutOfRange { year });
        }
        Ok(self.entries.insert(year, vested))
    }

    /// Returns the explicit entry for `year`, if any.
    #[inline]
    pub fn get(&self, year: Year) -> Option<u64> {
        self.entries.get(&year).copied()
    }

    /// Number of explicit entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the schedule has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over explicit entries in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Year, u64)> + '_ {
        self.entries.iter().map(|(year, vested)| (*year, *vested))
    }

    /// Projection years with no explicit entry, in chronological order.
    pub fn missing_years(&self) -> Vec<Year> {
        Year::projection_years()
            .filter(|year| !self.entries.contains_key(year))
            .collect()
    }

    /// Returns whether every projection year has an entry.
    pub fn is_complete(&self) -> bool {
        self.entries.len() == PROJECTION_YEARS
    }

    /// Vested count for `year` under the given lookup mode.
    ///
    /// # Errors
    ///
    /// - `YearOutOfRange` if `year` is not a projection year
    /// - `MissingYears` (listing just `year`) in strict mode when the entry is absent
    pub fn vested_for(&self, year: Year, mode: ScheduleMode) -> Result<u64, ScheduleError> {
        if !year.is_projection() {
            return Err(ScheduleError::YearOutOfRange { year });
        }
        match (self.get(year), mode) {
            (Some(vested), _) => Ok(vested),
            (None, ScheduleMode::Strict) => Err(ScheduleError::MissingYears { years: vec![year] }),
            (None, ScheduleMode::Lenient) => Ok(self
                .entries
                .range(..year)
                .next_back()
                .map_or(0, |(_, vested)| *vested)),
        }
    }

    /// Vested counts for all projection years, indexed from 2025.
    ///
    /// # Errors
    ///
    /// In strict mode returns `MissingYears` listing every absent year.
    pub fn resolve(&self, mode: ScheduleMode) -> Result<[u64; PROJECTION_YEARS], ScheduleError> {
        if mode == ScheduleMode::Strict {
            let missing = self.missing_years();
            if !missing.is_empty() {
                return Err(ScheduleError::MissingYears { years: missing });
            }
        }

        let mut resolved = [0_u64; PROJECTION_YEARS];
        let mut carried = 0_u64;
        for (slot, year) in resolved.iter_mut().zip(Year::projection_years()) {
            if let Some(vested) = self.get(year) {
                carried = vested;
            }
            *slot = carried;
        }
        Ok(resolved)
    }

    /// Advisory warnings: decreasing counts and counts above the total grant.
    pub fn advisories(&self, total_grant_shares: u64) -> Vec<VestingAdvisory> {
        let mut advisories = Vec::new();
        let mut previous: Option<u64> = None;

        for (year, vested) in self.iter() {
            if let Some(prev) = previous {
                if vested < prev {
                    advisories.push(VestingAdvisory::Decreasing {
                        year,
                        previous: prev,
                        current: vested,
                    });
                }
            }
            if vested > total_grant_shares {
                advisories.push(VestingAdvisory::ExceedsGrant {
                    year,
                    vested,
                    total: total_grant_shares,
                });
            }
            previous = Some(vested);
        }

        advisories
    }
}

impl From<VestingSchedule> for BTreeMap<Year, u64> {
    fn from(schedule: VestingSchedule) -> Self {
        schedule.entries
    }
}

impl TryFrom<BTreeMap<Year, u64>> for VestingSchedule {
    type Error = ScheduleError;

    fn try_from(entries: BTreeMap<Year, u64>) -> Result<Self, Self::Error> {
        Self::from_entries(entries)
    }
}

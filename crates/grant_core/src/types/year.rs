//! Projection calendar.
//!
//! The projection runs over the closed range [`SEED_YEAR`, `FINAL_YEAR`]:
//! one seed year followed by eleven projection years. Redemption activity
//! begins in [`FIRST_REDEMPTION_YEAR`].

use std::fmt;

/// A calendar year on the projection horizon.
///
/// `Year` is a thin newtype over `u16`. Construction never fails; range
/// checks happen where a year is used as a lookup key (vesting schedules,
/// ledgers).
///
/// # Examples
/// ```
/// use grant_core::types::{Year, FIRST_PROJECTION_YEAR, SEED_YEAR};
///
/// let year = Year::new(2025);
/// assert_eq!(year, FIRST_PROJECTION_YEAR);
/// assert_eq!(year.previous(), Some(SEED_YEAR));
/// assert_eq!(year.projection_index(), Some(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Year(u16);

/// Seed year: opening balances, no valuation.
pub const SEED_YEAR: Year = Year(2024);

/// First valued year. No redemption takes place in this year.
pub const FIRST_PROJECTION_YEAR: Year = Year(2025);

/// First year in which either instrument is redeemed.
pub const FIRST_REDEMPTION_YEAR: Year = Year(2026);

/// Last year of the projection.
pub const FINAL_YEAR: Year = Year(2035);

/// Number of projection years (2025-2035).
pub const PROJECTION_YEARS: usize = (FINAL_YEAR.0 - FIRST_PROJECTION_YEAR.0) as usize + 1;

/// Number of ledger rows including the seed year (2024-2035).
pub const LEDGER_YEARS: usize = PROJECTION_YEARS + 1;

impl Year {
    /// Creates a year from its calendar value.
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Returns the calendar value.
    #[inline]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Returns the preceding calendar year, or `None` at year zero.
    #[inline]
    pub fn previous(self) -> Option<Year> {
        self.0.checked_sub(1).map(Year)
    }

    /// Returns whether the year lies in the seed-plus-projection range.
    #[inline]
    pub fn is_on_horizon(self) -> bool {
        (SEED_YEAR..=FINAL_YEAR).contains(&self)
    }

    /// Returns whether the year is a valued projection year (2025-2035).
    #[inline]
    pub fn is_projection(self) -> bool {
        (FIRST_PROJECTION_YEAR..=FINAL_YEAR).contains(&self)
    }

    /// Position within the projection years, `None` outside 2025-2035.
    pub fn projection_index(self) -> Option<usize> {
        self.is_projection()
            .then(|| (self.0 - FIRST_PROJECTION_YEAR.0) as usize)
    }

    /// Position within the ledger rows, `None` outside 2024-2035.
    pub fn ledger_index(self) -> Option<usize> {
        self.is_on_horizon().then(|| (self.0 - SEED_YEAR.0) as usize)
    }

    /// Iterates over the projection years 2025..=2035.
    pub fn projection_years() -> impl DoubleEndedIterator<Item = Year> + Clone {
        (FIRST_PROJECTION_YEAR.0..=FINAL_YEAR.0).map(Year)
    }

    /// Iterates over every ledger year 2024..=2035.
    pub fn ledger_years() -> impl DoubleEndedIterator<Item = Year> + Clone {
        (SEED_YEAR.0..=FINAL_YEAR.0).map(Year)
    }

    /// Iterates over the redemption years 2026..=2035.
    pub fn redemption_years() -> impl DoubleEndedIterator<Item = Year> + Clone {
        (FIRST_REDEMPTION_YEAR.0..=FINAL_YEAR.0).map(Year)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl From<u16> for Year {
    fn from(value: u16) -> Self {
        Year(value)
    }
}

impl std::str::FromStr for Year {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u16>().map(Year)
    }
}

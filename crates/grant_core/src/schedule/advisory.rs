//! Advisory checks on vesting schedules.

use crate::types::Year;
use std::fmt;

/// A non-blocking warning about a vesting schedule.
///
/// Vested counts are cumulative, so a grant should never "un-vest" and
/// should never vest more than was granted. Neither condition stops a
/// valuation; callers decide whether to surface them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum VestingAdvisory {
    /// The vested count dropped from one year to the next.
    Decreasing {
        /// Year with the lower count
        year: Year,
        /// Count in the preceding entry
        previous: u64,
        /// Count in this year
        current: u64,
    },
    /// The vested count exceeds the total grant.
    ExceedsGrant {
        /// Offending year
        year: Year,
        /// Vested count in that year
        vested: u64,
        /// Total grant shares
        total: u64,
    },
}

impl VestingAdvisory {
    /// Year the advisory refers to.
    pub fn year(&self) -> Year {
        match self {
            VestingAdvisory::Decreasing { year, .. }
            | VestingAdvisory::ExceedsGrant { year, .. } => *year,
        }
    }
}

impl fmt::Display for VestingAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VestingAdvisory::Decreasing {
                year,
                previous,
                current,
            } => write!(
                f,
                "Vested shares for year {} ({}) are less than previous year ({}). \
                 Vesting should typically be non-decreasing.",
                year, current, previous
            ),
            VestingAdvisory::ExceedsGrant {
                year,
                vested,
                total,
            } => write!(
                f,
                "Vested shares for year {} ({}) exceed total grant shares ({})",
                year, vested, total
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decreasing_display() {
        let advisory = VestingAdvisory::Decreasing {
            year: Year::new(2028),
            previous: 90_000,
            current: 80_000,
        };
        let text = advisory.to_string();
        assert!(text.contains("2028"));
        assert!(text.contains("non-decreasing"));
        assert_eq!(advisory.year(), Year::new(2028));
    }

    #[test]
    fn test_exceeds_display() {
        let advisory = VestingAdvisory::ExceedsGrant {
            year: Year::new(2030),
            vested: 120_000,
            total: 100_000,
        };
        assert!(advisory.to_string().contains("exceed total grant shares (100000)"));
    }
}

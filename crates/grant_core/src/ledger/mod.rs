//! Year-by-year valuation ledger.
//!
//! A [`Ledger`] holds exactly one [`YearRecord`] per year 2024-2035 in
//! chronological order. Each record splits into a [`CommonLedger`] and a
//! [`GrantLedger`]; the two branches meet only in
//! [`YearRecord::combined_total_value`].

mod record;

pub use record::{CommonLedger, GrantLedger, YearRecord};

use crate::types::{LedgerError, Year, LEDGER_YEARS};

/// Complete projection for one parameter set.
///
/// # Examples
///
/// ```
/// use grant_core::ledger::{Ledger, YearRecord};
/// use grant_core::types::Year;
///
/// let records: Vec<YearRecord> = Year::ledger_years()
///     .map(|year| YearRecord::seed(year, 6.0, 10, 10))
///     .collect();
/// let ledger = Ledger::new(records);
///
/// assert_eq!(ledger.len(), 12);
/// assert_eq!(ledger.get(Year::new(2030)).unwrap().year, Year::new(2030));
/// assert!(ledger.get(Year::new(2036)).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ledger {
    records: Vec<YearRecord>,
}

impl Ledger {
    /// Wraps a chronological list of records.
    ///
    /// # Panics
    ///
    /// Panics unless `records` holds exactly the years 2024..=2035 in order.
    /// Use `Ledger::try_from` for records from outside the engine.
    pub fn new(records: Vec<YearRecord>) -> Self {
        match Self::try_from(records) {
            Ok(ledger) => ledger,
            Err(err) => panic!("{}", err),
        }
    }

    /// Record for `year`, `None` outside 2024-2035.
    #[inline]
    pub fn get(&self, year: Year) -> Option<&YearRecord> {
        year.ledger_index().map(|index| &self.records[index])
    }

    /// All records, seed year first.
    #[inline]
    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    /// Iterates over all records in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, YearRecord> {
        self.records.iter()
    }

    /// Number of records (always 12).
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; provided for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The 2024 seed record.
    #[inline]
    pub fn seed_record(&self) -> &YearRecord {
        &self.records[0]
    }

    /// Valued records, 2025 onwards.
    #[inline]
    pub fn projection(&self) -> &[YearRecord] {
        &self.records[1..]
    }

    /// The 2035 record.
    #[inline]
    pub fn final_record(&self) -> &YearRecord {
        &self.records[LEDGER_YEARS - 1]
    }

    /// Combined value for `year`; `None` for 2024 or off-horizon years.
    pub fn combined_total_value(&self, year: Year) -> Option<f64> {
        self.get(year).and_then(|record| record.combined_total_value)
    }
}

impl TryFrom<Vec<YearRecord>> for Ledger {
    type Error = LedgerError;

    fn try_from(records: Vec<YearRecord>) -> Result<Self, Self::Error> {
        if records.len() != LEDGER_YEARS {
            return Err(LedgerError::WrongLength { len: records.len() });
        }
        if let Some((record, expected)) = records
            .iter()
            .zip(Year::ledger_years())
            .find(|(record, year)| record.year != *year)
        {
            return Err(LedgerError::OutOfOrder {
                expected,
                found: record.year,
            });
        }
        Ok(Self { records })
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Ledger {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Records {
            records: Vec<YearRecord>,
        }

        let Records { records } = <Records as serde::Deserialize>::deserialize(deserializer)?;
        Ledger::try_from(records).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a YearRecord;
    type IntoIter = std::slice::Iter<'a, YearRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

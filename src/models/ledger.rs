//! The ledger: two ordered sequences of records
//!
//! Position within a sequence is the only identity a record has. Removing a
//! record shifts every later record down by one.

use serde::{Deserialize, Serialize};

use super::expense::ExpenseRecord;
use super::income::IncomeRecord;
use super::record::{Entry, RecordKind};
use crate::error::{LedgerError, LedgerResult};

/// All income and expense records, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub income: Vec<IncomeRecord>,
    #[serde(default)]
    pub expenses: Vec<ExpenseRecord>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records in the selected sequence
    pub fn len(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Income => self.income.len(),
            RecordKind::Expense => self.expenses.len(),
        }
    }

    /// True when both sequences are empty
    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }

    /// All records of one kind, in order
    pub fn entries(&self, kind: RecordKind) -> Vec<Entry> {
        match kind {
            RecordKind::Income => self.income.iter().cloned().map(Entry::Income).collect(),
            RecordKind::Expense => self.expenses.iter().cloned().map(Entry::Expense).collect(),
        }
    }

    /// Fail with an index error unless `position` addresses an existing record
    pub fn check_position(&self, kind: RecordKind, position: usize) -> LedgerResult<()> {
        self.position_of(kind, position.saturating_add(1)).map(|_| ())
    }

    /// Turn a 1-based record number, as listed to the user, into a position
    pub fn position_of(&self, kind: RecordKind, number: usize) -> LedgerResult<usize> {
        let len = self.len(kind);
        if (1..=len).contains(&number) {
            Ok(number - 1)
        } else {
            Err(LedgerError::IndexOutOfRange {
                kind: kind.label(),
                number,
                len,
            })
        }
    }

    pub fn push(&mut self, entry: Entry) {
        match entry {
            Entry::Income(r) => self.income.push(r),
            Entry::Expense(r) => self.expenses.push(r),
        }
    }

    /// Replace the record at `position` in the entry's own sequence
    ///
    /// Returns the record that was replaced.
    pub fn replace(&mut self, position: usize, entry: Entry) -> LedgerResult<Entry> {
        self.check_position(entry.kind(), position)?;

        let previous = match entry {
            Entry::Income(r) => Entry::Income(std::mem::replace(&mut self.income[position], r)),
            Entry::Expense(r) => {
                Entry::Expense(std::mem::replace(&mut self.expenses[position], r))
            }
        };
        Ok(previous)
    }

    /// Remove and return the record at `position`
    pub fn remove(&mut self, kind: RecordKind, position: usize) -> LedgerResult<Entry> {
        self.check_position(kind, position)?;

        let removed = match kind {
            RecordKind::Income => Entry::Income(self.income.remove(position)),
            RecordKind::Expense => Entry::Expense(self.expenses.remove(position)),
        };
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, IncomeSource, Money};
    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn sample() -> Ledger {
        let mut ledger = Ledger::new();
        for (i, units) in [500, 250, 75].into_iter().enumerate() {
            ledger.push(
                IncomeRecord::new(
                    Money::from_units(units),
                    IncomeSource::Freelance,
                    date(i as u32 + 1),
                    format!("gig {}", i),
                )
                .into(),
            );
        }
        ledger.push(
            ExpenseRecord::new(Money::from_units(20), ExpenseCategory::Food, date(2), "lunch")
                .into(),
        );
        ledger
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(RecordKind::Income), 0);
        assert!(ledger.entries(RecordKind::Expense).is_empty());
        assert!(ledger.check_position(RecordKind::Expense, 0).is_err());
    }

    #[test]
    fn test_remove_shifts_positions() {
        let mut ledger = sample();
        let removed = ledger.remove(RecordKind::Income, 1).unwrap();

        assert_eq!(removed.description(), "gig 1");
        assert_eq!(ledger.income.len(), 2);
        assert_eq!(ledger.income[0].description, "gig 0");
        assert_eq!(ledger.income[1].description, "gig 2");
        assert_eq!(ledger.expenses.len(), 1);
    }

    #[test]
    fn test_replace_keeps_order() {
        let mut ledger = sample();
        let replacement =
            IncomeRecord::new(Money::from_units(9), IncomeSource::Rental, date(9), "rent");

        let previous = ledger.replace(2, replacement.clone().into()).unwrap();
        assert_eq!(previous.description(), "gig 2");
        assert_eq!(ledger.income[2], replacement);
        assert_eq!(ledger.income.len(), 3);
    }

    #[test]
    fn test_out_of_bounds_is_rejected_without_change() {
        let mut ledger = sample();
        let before = ledger.clone();

        let err = ledger.remove(RecordKind::Expense, 1).unwrap_err();
        assert!(err.is_index_error());

        let replacement =
            ExpenseRecord::new(Money::from_units(1), ExpenseCategory::Other, date(1), "");
        assert!(ledger.replace(5, replacement.into()).is_err());

        assert_eq!(ledger, before);
    }

    #[test]
    fn test_position_of_record_number() {
        let ledger = sample();

        assert_eq!(ledger.position_of(RecordKind::Income, 1).unwrap(), 0);
        assert_eq!(ledger.position_of(RecordKind::Income, 3).unwrap(), 2);

        for number in [0, 4] {
            let err = ledger.position_of(RecordKind::Income, number).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Invalid index! Income number {} does not exist (3 records)", number)
            );
        }
        assert!(ledger.position_of(RecordKind::Expense, 2).unwrap_err().is_index_error());
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let ledger: Ledger = serde_json::from_str("{}").unwrap();
        assert!(ledger.is_empty());
    }
}

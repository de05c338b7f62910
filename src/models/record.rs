//! Shared record vocabulary
//!
//! Income and expense records differ only in how they are classified. The
//! `Classification` trait captures the closed option sets, and `Entry` /
//! `RecordKind` let the store address either sequence by position.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::ExpenseRecord;
use super::income::IncomeRecord;
use super::money::Money;

/// A closed set of labels a record is classified by
pub trait Classification: Copy + Eq + fmt::Display + 'static {
    /// Every option, in menu order
    const ALL: &'static [Self];

    /// What the option set is called in prompts ("source", "category")
    const NOUN: &'static str;

    /// Heading printed above the option list ("Sources", "Categories")
    const HEADING: &'static str;

    /// Look up an option by its 1-based menu index
    fn from_menu_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i)).copied()
    }
}

/// Which of the two ledger sequences an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    /// Label used in user-facing messages
    pub const fn label(&self) -> &'static str {
        match self {
            RecordKind::Income => "Income",
            RecordKind::Expense => "Expense",
        }
    }

    /// Lowercase label used inside prompts
    pub const fn noun(&self) -> &'static str {
        match self {
            RecordKind::Income => "income",
            RecordKind::Expense => "expense",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Validation errors shared by income and expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "amount must be greater than zero (got {})", amount)
            }
        }
    }
}

impl std::error::Error for RecordValidationError {}

/// A record of either kind, used when replacing a record in place
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Income(IncomeRecord),
    Expense(ExpenseRecord),
}

impl Entry {
    pub fn kind(&self) -> RecordKind {
        match self {
            Entry::Income(_) => RecordKind::Income,
            Entry::Expense(_) => RecordKind::Expense,
        }
    }

    pub fn amount(&self) -> Money {
        match self {
            Entry::Income(r) => r.amount,
            Entry::Expense(r) => r.amount,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Entry::Income(r) => r.date,
            Entry::Expense(r) => r.date,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Entry::Income(r) => &r.description,
            Entry::Expense(r) => &r.description,
        }
    }

    /// The source or category label
    pub fn classification(&self) -> String {
        match self {
            Entry::Income(r) => r.source.to_string(),
            Entry::Expense(r) => r.category.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        match self {
            Entry::Income(r) => r.validate(),
            Entry::Expense(r) => r.validate(),
        }
    }
}

impl From<IncomeRecord> for Entry {
    fn from(record: IncomeRecord) -> Self {
        Entry::Income(record)
    }
}

impl From<ExpenseRecord> for Entry {
    fn from(record: ExpenseRecord) -> Self {
        Entry::Expense(record)
    }
}

pub(crate) fn validate_amount(amount: Money) -> Result<(), RecordValidationError> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(RecordValidationError::NonPositiveAmount(amount))
    }
}

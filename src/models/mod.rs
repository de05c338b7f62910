//! Core data models for the finance ledger
//!
//! This module contains the data structures that represent the ledger domain:
//! income and expense records, their classifications, money amounts and the
//! ledger that holds them.

pub mod date;
pub mod expense;
pub mod income;
pub mod ledger;
pub mod money;
pub mod record;

pub use date::{parse_entry_date, DATE_FORMAT};
pub use expense::{ExpenseCategory, ExpenseRecord};
pub use income::{IncomeRecord, IncomeSource};
pub use ledger::Ledger;
pub use money::{Money, MoneyParseError};
pub use record::{Classification, Entry, RecordKind, RecordValidationError};

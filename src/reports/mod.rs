//! Reports module
//!
//! Read-only aggregation over a ledger snapshot.

pub mod summary;

pub use summary::{
    balance, expense_breakdown, total_expense, total_income, CategoryWeight, LedgerSummary,
};

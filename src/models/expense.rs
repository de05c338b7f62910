//! Expense record model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::record::{validate_amount, Classification, RecordValidationError};

/// Spending category for an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Travel,
    Housing,
    Entertainment,
    Utilities,
    Other,
}

impl Classification for ExpenseCategory {
    const ALL: &'static [Self] = &[
        ExpenseCategory::Food,
        ExpenseCategory::Travel,
        ExpenseCategory::Housing,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Utilities,
        ExpenseCategory::Other,
    ];

    const NOUN: &'static str = "category";
    const HEADING: &'static str = "Categories";
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Other => "Other",
        };
        f.pad(name)
    }
}

/// A single expense transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub amount: Money,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(
        amount: Money,
        category: ExpenseCategory,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            category,
            date,
            description: description.into(),
        }
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_amount(self.amount)
    }
}

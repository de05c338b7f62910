//! Income record model
//!
//! An income record is money received, tagged with where it came from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::record::{validate_amount, Classification, RecordValidationError};

/// Where an income record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeSource {
    Salary,
    Rental,
    Investment,
    Freelance,
    Other,
}

impl Classification for IncomeSource {
    const ALL: &'static [Self] = &[
        IncomeSource::Salary,
        IncomeSource::Rental,
        IncomeSource::Investment,
        IncomeSource::Freelance,
        IncomeSource::Other,
    ];

    const NOUN: &'static str = "source";
    const HEADING: &'static str = "Sources";
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IncomeSource::Salary => "Salary",
            IncomeSource::Rental => "Rental",
            IncomeSource::Investment => "Investment",
            IncomeSource::Freelance => "Freelance",
            IncomeSource::Other => "Other",
        };
        f.pad(name)
    }
}

/// A single income transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeRecord {
    pub amount: Money,
    pub source: IncomeSource,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl IncomeRecord {
    /// Create a new income record
    pub fn new(
        amount: Money,
        source: IncomeSource,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            source,
            date,
            description: description.into(),
        }
    }

    /// Validate the record
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        validate_amount(self.amount)
    }
}

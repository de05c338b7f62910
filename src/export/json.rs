//! JSON Export functionality
//!
//! Exports the ledger together with its summary and export metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, Money, RecordKind};
use crate::reports::LedgerSummary;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: String,
    pub ledger: Ledger,
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub income_count: usize,
    pub expense_count: usize,
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
    /// Earliest record date across both sequences
    pub earliest_record: Option<String>,
    /// Latest record date across both sequences
    pub latest_record: Option<String>,
}

impl FullExport {
    /// Build an export from a ledger snapshot
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let summary = LedgerSummary::generate(ledger);
        let dates = || {
            ledger
                .income
                .iter()
                .map(|r| r.date)
                .chain(ledger.expenses.iter().map(|r| r.date))
        };

        let metadata = ExportMetadata {
            income_count: ledger.len(RecordKind::Income),
            expense_count: ledger.len(RecordKind::Expense),
            total_income: summary.total_income,
            total_expense: summary.total_expense,
            balance: summary.balance,
            earliest_record: dates().min().map(|d| d.to_string()),
            latest_record: dates().max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            ledger: ledger.clone(),
            metadata,
        }
    }
}

/// Export the ledger to JSON
pub fn export_full_json<W: Write>(ledger: &Ledger, writer: W, pretty: bool) -> LedgerResult<()> {
    let export = FullExport::from_ledger(ledger);

    let result = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };

    result.map_err(|e| LedgerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseRecord, IncomeRecord, IncomeSource};
    use chrono::NaiveDate;

    fn sample() -> Ledger {
        Ledger {
            income: vec![IncomeRecord::new(
                Money::from_units(500),
                IncomeSource::Rental,
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                "",
            )],
            expenses: vec![ExpenseRecord::new(
                Money::from_units(120),
                ExpenseCategory::Utilities,
                NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
                "gas",
            )],
        }
    }

    #[test]
    fn test_metadata() {
        let export = FullExport::from_ledger(&sample());

        assert_eq!(export.metadata.income_count, 1);
        assert_eq!(export.metadata.expense_count, 1);
        assert_eq!(export.metadata.balance, Money::from_units(380));
        assert_eq!(export.metadata.earliest_record.as_deref(), Some("2024-01-20"));
        assert_eq!(export.metadata.latest_record.as_deref(), Some("2024-03-01"));
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut out = Vec::new();
        export_full_json(&sample(), &mut out, true).unwrap();

        let imported: FullExport = serde_json::from_slice(&out).unwrap();
        assert_eq!(imported.ledger, sample());
    }

    #[test]
    fn test_empty_ledger_has_no_date_range() {
        let export = FullExport::from_ledger(&Ledger::new());
        assert_eq!(export.metadata.income_count, 0);
        assert!(export.metadata.earliest_record.is_none());
        assert!(export.metadata.latest_record.is_none());
    }
}

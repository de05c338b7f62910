//! CSV Export functionality
//!
//! One row per record, income first, each sequence in ledger order.

use serde::Serialize;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Entry, Ledger, RecordKind};

/// Output row; headers are `kind,number,date,classification,amount,description`
#[derive(Serialize)]
struct CsvRow<'a> {
    kind: RecordKind,
    /// 1-based position within its sequence
    number: usize,
    date: String,
    classification: String,
    /// Two decimal places, no currency symbol
    amount: String,
    description: &'a str,
}

/// Export every record in the ledger to CSV
pub fn export_records_csv<W: Write>(ledger: &Ledger, writer: W) -> LedgerResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let entries = ledger
        .entries(RecordKind::Income)
        .into_iter()
        .chain(ledger.entries(RecordKind::Expense));

    let mut numbers = (0usize, 0usize);
    for entry in entries {
        let number = match entry.kind() {
            RecordKind::Income => {
                numbers.0 += 1;
                numbers.0
            }
            RecordKind::Expense => {
                numbers.1 += 1;
                numbers.1
            }
        };
        wtr.serialize(row(number, &entry)).map_err(export_error)?;
    }

    wtr.flush()
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

fn row(number: usize, entry: &Entry) -> CsvRow<'_> {
    CsvRow {
        kind: entry.kind(),
        number,
        date: entry.date().to_string(),
        classification: entry.classification(),
        amount: entry.amount().format_with_symbol(""),
        description: entry.description(),
    }
}

fn export_error(e: csv::Error) -> LedgerError {
    LedgerError::Export(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseRecord, IncomeRecord, IncomeSource, Money};
    use chrono::NaiveDate;

    fn export_to_string(ledger: &Ledger) -> String {
        let mut out = Vec::new();
        export_records_csv(ledger, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rows_in_ledger_order() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let ledger = Ledger {
            income: vec![IncomeRecord::new(
                Money::from_units(1000),
                IncomeSource::Salary,
                date,
                "pay",
            )],
            expenses: vec![
                ExpenseRecord::new(Money::from_cents(250), ExpenseCategory::Food, date, "tea, milk"),
                ExpenseRecord::new(Money::from_units(40), ExpenseCategory::Travel, date, ""),
            ],
        };

        let text = export_to_string(&ledger);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "kind,number,date,classification,amount,description");
        assert_eq!(lines[1], "income,1,2024-01-01,Salary,1000.00,pay");
        assert_eq!(lines[2], "expense,1,2024-01-01,Food,2.50,\"tea, milk\"");
        assert_eq!(lines[3], "expense,2,2024-01-01,Travel,40.00,");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_negative_amounts_keep_their_sign() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let ledger = Ledger {
            income: vec![
                IncomeRecord::new(Money::from_cents(-50), IncomeSource::Other, date, "refund"),
                IncomeRecord::new(Money::from_cents(-1250), IncomeSource::Other, date, ""),
            ],
            expenses: vec![],
        };

        let text = export_to_string(&ledger);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "income,1,2024-01-01,Other,-0.50,refund");
        assert_eq!(lines[2], "income,2,2024-01-01,Other,-12.50,");
    }

    #[test]
    fn test_empty_ledger_writes_nothing() {
        // csv only emits the header alongside the first record
        assert!(export_to_string(&Ledger::new()).is_empty());
    }
}

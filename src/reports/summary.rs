//! Ledger summary report
//!
//! Totals, balance and expense weightage by category. Everything here is a
//! pure function of the ledger snapshot and is recomputed on every call.

use serde::Serialize;

use crate::models::{ExpenseCategory, Ledger, Money};

/// One row of the expense breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryWeight {
    pub category: ExpenseCategory,
    /// Total spent in this category
    pub amount: Money,
    /// Share of total expenses, in percent
    pub weightage: f64,
}

/// Sum of all income amounts
pub fn total_income(ledger: &Ledger) -> Money {
    ledger.income.iter().map(|r| r.amount).sum()
}

/// Sum of all expense amounts
pub fn total_expense(ledger: &Ledger) -> Money {
    ledger.expenses.iter().map(|r| r.amount).sum()
}

/// Income minus expenses; may be negative
pub fn balance(ledger: &Ledger) -> Money {
    total_income(ledger) - total_expense(ledger)
}

/// Expenses grouped by category, in the order each category first appears
///
/// Empty when total expenses are zero.
pub fn expense_breakdown(ledger: &Ledger) -> Vec<CategoryWeight> {
    let total = total_expense(ledger);
    if total.is_zero() {
        return Vec::new();
    }

    let mut totals: Vec<(ExpenseCategory, Money)> = Vec::new();
    for record in &ledger.expenses {
        match totals.iter_mut().find(|(c, _)| *c == record.category) {
            Some((_, amount)) => *amount += record.amount,
            None => totals.push((record.category, record.amount)),
        }
    }

    totals
        .into_iter()
        .map(|(category, amount)| CategoryWeight {
            category,
            amount,
            weightage: amount.percentage_of(total),
        })
        .collect()
}

/// Snapshot of every summary figure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
    pub breakdown: Vec<CategoryWeight>,
}

impl LedgerSummary {
    /// Compute the summary for a ledger
    pub fn generate(ledger: &Ledger) -> Self {
        Self {
            total_income: total_income(ledger),
            total_expense: total_expense(ledger),
            balance: balance(ledger),
            breakdown: expense_breakdown(ledger),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency_symbol);

        let mut output = String::new();
        output.push_str("Financial Summary:\n");
        output.push_str(&format!("Total Income: {}\n", money(self.total_income)));
        output.push_str(&format!("Total Expense: {}\n", money(self.total_expense)));
        output.push_str(&format!("Balance: {}\n", money(self.balance)));

        if !self.breakdown.is_empty() {
            output.push_str("\nExpense Weightage by Category:\n");
            for (i, row) in self.breakdown.iter().enumerate() {
                output.push_str(&format!(
                    "{}. {}: {} ({:.2}%)\n",
                    i + 1,
                    row.category,
                    money(row.amount),
                    row.weightage
                ));
            }
        }

        output
    }
}

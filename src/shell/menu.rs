//! Main menu choices

use crate::models::RecordKind;

/// Top-level menu text, printed before every choice
pub const MAIN_MENU: &str = "\n1. Add Income\n2. Add Expense\n3. Show Summary\n4. Edit Transaction\n5. Delete Transaction\n6. Exit";

/// One of the six main menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddIncome,
    AddExpense,
    ShowSummary,
    Edit,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Parse the user's answer to "Choose an option (1-6)"
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddIncome),
            "2" => Some(Self::AddExpense),
            "3" => Some(Self::ShowSummary),
            "4" => Some(Self::Edit),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Parse the income-vs-expense answer used by edit and delete
pub fn parse_kind(input: &str) -> Option<RecordKind> {
    match input.trim() {
        "1" => Some(RecordKind::Income),
        "2" => Some(RecordKind::Expense),
        _ => None,
    }
}

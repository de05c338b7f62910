//! Record display formatting
//!
//! Numbered listings of records and of classification options, as shown in
//! the interactive menu and by the `list` command.

use crate::models::{Classification, Entry};

/// Format one record as `N. <classification>: <amount>, <date>, <description>`
///
/// `number` is the 1-based position shown to the user.
pub fn format_record_line(number: usize, entry: &Entry, currency_symbol: &str) -> String {
    format!(
        "{}. {}: {}, {}, {}",
        number,
        entry.classification(),
        entry.amount().format_with_symbol(currency_symbol),
        entry.date(),
        entry.description()
    )
}

/// Format a numbered list of records, one per line
pub fn format_record_list(entries: &[Entry], currency_symbol: &str) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format_record_line(i + 1, entry, currency_symbol) + "\n")
        .collect()
}

/// Format the numbered options of a classification set
pub fn format_options<C: Classification>() -> String {
    C::ALL
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}. {}\n", i + 1, option))
        .collect()
}

//! Entry date parsing

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};

/// Format used for record dates on screen and on disk
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a user-entered date, substituting `today` for blank input
pub fn parse_entry_date(input: &str, today: NaiveDate) -> LedgerResult<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(today);
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| LedgerError::InvalidDate(input.to_string()))
}

//! Display formatting for terminal output

pub mod transaction;

pub use transaction::{format_options, format_record_line, format_record_list};

//! Export module for the finance ledger
//!
//! - CSV: one row per record (spreadsheet-compatible)
//! - JSON: full ledger plus summary metadata
//! - YAML: same as JSON, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_records_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;

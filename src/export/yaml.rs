//! YAML Export functionality
//!
//! Same content as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::FullExport;
use crate::models::Ledger;

/// Export the ledger to YAML
pub fn export_full_yaml<W: Write>(ledger: &Ledger, mut writer: W) -> LedgerResult<()> {
    let export = FullExport::from_ledger(ledger);

    write!(
        writer,
        "# Finance Ledger Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    )
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))
}

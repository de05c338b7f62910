//! JSON snapshot file
//!
//! The whole ledger lives in one pretty-printed JSON document that is
//! rewritten on every save.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::file_io::{read_json, write_json_atomic};
use super::SnapshotStore;
use crate::error::LedgerResult;
use crate::models::{Ledger, RecordKind};

/// Ledger snapshot backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> LedgerResult<Ledger> {
        let ledger: Ledger = read_json(&self.path)?;
        debug!(
            path = %self.path.display(),
            income = ledger.len(RecordKind::Income),
            expenses = ledger.len(RecordKind::Expense),
            "loaded ledger"
        );
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
        write_json_atomic(&self.path, ledger)?;
        debug!(path = %self.path.display(), "saved ledger");
        Ok(())
    }
}

//! Storage layer for the finance ledger
//!
//! The ledger is persisted as a whole snapshot. `SnapshotStore` is the seam
//! between the snapshot format and the rest of the crate; `JsonFileStore` is
//! the JSON file implementation.

pub mod file_io;
pub mod json_file;

pub use file_io::{read_json, write_json_atomic};
pub use json_file::JsonFileStore;

use crate::error::LedgerResult;
use crate::models::Ledger;

/// Durable home for a ledger snapshot
pub trait SnapshotStore {
    /// Read the persisted ledger, or an empty one if nothing was ever saved
    fn load(&self) -> LedgerResult<Ledger>;

    /// Overwrite the persisted ledger with `ledger`
    fn save(&self, ledger: &Ledger) -> LedgerResult<()>;
}

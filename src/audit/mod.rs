//! Audit logging for the finance ledger
//!
//! Records every create, update and delete with before/after values in an
//! append-only log.
//!
//! - `AuditEntry`: one operation on one record, with timestamp, position and
//!   optional before/after JSON.
//! - `AuditLogger`: writes entries to the log file as JSON lines (JSONL).
//! - `generate_diff`: field-level summary of an edit.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;

//! Ledger service
//!
//! Mutating operations on a ledger. Every operation validates its input,
//! applies the change to a working copy, persists the full snapshot and only
//! then commits the copy to the caller's ledger. A rejected or failed
//! operation leaves the caller's ledger untouched.

use tracing::{info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Entry, ExpenseRecord, IncomeRecord, Ledger, RecordKind};
use crate::storage::SnapshotStore;

/// Service for adding, editing and deleting records
pub struct LedgerService<'a, S: SnapshotStore> {
    store: &'a S,
    audit: Option<&'a AuditLogger>,
}

impl<'a, S: SnapshotStore> LedgerService<'a, S> {
    /// Create a service that persists through `store`
    pub fn new(store: &'a S) -> Self {
        Self { store, audit: None }
    }

    /// Record every successful mutation in `audit`
    pub fn with_audit(mut self, audit: &'a AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Read the persisted ledger
    pub fn load(&self) -> LedgerResult<Ledger> {
        self.store.load()
    }

    /// Append an income record and save
    pub fn append_income(&self, ledger: &mut Ledger, record: IncomeRecord) -> LedgerResult<()> {
        self.append(ledger, Entry::Income(record))
    }

    /// Append an expense record and save
    pub fn append_expense(&self, ledger: &mut Ledger, record: ExpenseRecord) -> LedgerResult<()> {
        self.append(ledger, Entry::Expense(record))
    }

    /// Replace the record at `position` in the sequence matching `record`'s kind
    ///
    /// Returns the record that was replaced.
    pub fn update_at(
        &self,
        ledger: &mut Ledger,
        position: usize,
        record: Entry,
    ) -> LedgerResult<Entry> {
        validate(&record)?;

        let mut next = ledger.clone();
        let previous = next.replace(position, record.clone())?;
        self.commit(ledger, next)?;

        info!(kind = %record.kind(), position, "updated record");
        self.audit(AuditEntry::update(position, &previous, &record));
        Ok(previous)
    }

    /// Remove the record at `position`, shifting later records down
    ///
    /// Returns the removed record.
    pub fn delete_at(
        &self,
        ledger: &mut Ledger,
        kind: RecordKind,
        position: usize,
    ) -> LedgerResult<Entry> {
        let mut next = ledger.clone();
        let removed = next.remove(kind, position)?;
        self.commit(ledger, next)?;

        info!(%kind, position, "deleted record");
        self.audit(AuditEntry::delete(position, &removed));
        Ok(removed)
    }

    fn append(&self, ledger: &mut Ledger, record: Entry) -> LedgerResult<()> {
        validate(&record)?;

        let kind = record.kind();
        let position = ledger.len(kind);
        let mut next = ledger.clone();
        next.push(record.clone());
        self.commit(ledger, next)?;

        info!(%kind, position, "appended record");
        self.audit(AuditEntry::create(position, &record));
        Ok(())
    }

    fn commit(&self, ledger: &mut Ledger, next: Ledger) -> LedgerResult<()> {
        self.store.save(&next)?;
        *ledger = next;
        Ok(())
    }

    // The snapshot is already durable at this point, so a failing audit
    // write is logged rather than surfaced.
    fn audit(&self, entry: AuditEntry) {
        if let Some(logger) = self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!("Failed to write audit entry: {}", e);
            }
        }
    }
}

fn validate(record: &Entry) -> LedgerResult<()> {
    record
        .validate()
        .map_err(|e| LedgerError::InvalidAmount(e.to_string()))
}

//! Service layer for the finance ledger
//!
//! Services hold the business rules for changing a ledger and keep the
//! persisted snapshot and audit log in step with it.

pub mod ledger;

pub use ledger::LedgerService;

//! Finance Ledger - Terminal-based personal income and expense tracker
//!
//! This library provides the core functionality for the `finledger` binary:
//! a single JSON-backed ledger of income and expense records, summary
//! reports, and an interactive menu shell for editing it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, records, the ledger)
//! - `storage`: JSON snapshot storage
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `reports`: Totals, balance and expense breakdown
//! - `display`: Terminal formatting for records and options
//! - `export`: CSV, JSON and YAML export
//! - `shell`: Interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_ledger::config::LedgerPaths;
//! use finance_ledger::reports::LedgerSummary;
//! use finance_ledger::storage::{JsonFileStore, SnapshotStore};
//!
//! let paths = LedgerPaths::resolve(None)?;
//! let ledger = JsonFileStore::new(paths.data_file()).load()?;
//! print!("{}", LedgerSummary::generate(&ledger).format_terminal("$"));
//! ```

pub mod audit;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{LedgerError, LedgerResult};

//! Configuration module for the finance ledger
//!
//! This module provides configuration management including:
//! - Base directory resolution (flag, environment, current directory)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;

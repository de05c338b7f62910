//! Path management for the finance ledger
//!
//! ## Path Resolution Order
//!
//! 1. An explicit directory (the `--dir` flag)
//! 2. `FINANCE_LEDGER_DIR` environment variable (if set)
//! 3. The current working directory

use std::path::PathBuf;

use crate::error::LedgerError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "FINANCE_LEDGER_DIR";

/// Manages all paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Directory holding the data file, audit log and settings
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve paths, preferring `explicit`, then the environment, then the
    /// current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, LedgerError> {
        let base_dir = match explicit {
            Some(dir) => dir,
            None => match std::env::var(DIR_ENV_VAR) {
                Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
                _ => std::env::current_dir().map_err(|e| {
                    LedgerError::Config(format!("Could not determine current directory: {}", e))
                })?,
            },
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the ledger snapshot
    pub fn data_file(&self) -> PathBuf {
        self.base_dir.join("finance_data.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("ledger_config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create base directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.data_file(),
            temp_dir.path().join("finance_data.json")
        );
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_explicit_dir_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::resolve(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let paths = LedgerPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}

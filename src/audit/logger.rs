//! Append-only audit log
//!
//! Each entry is written as a single JSON line (JSONL) and flushed
//! immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::trace;

use super::entry::AuditEntry;
use crate::error::{LedgerError, LedgerResult};

/// Writes and reads the audit log file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry to the log
    pub fn log(&self, entry: &AuditEntry) -> LedgerResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| LedgerError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| LedgerError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .and_then(|_| file.flush())
            .map_err(|e| LedgerError::Io(format!("Failed to write audit entry: {}", e)))?;

        trace!(operation = %entry.operation, kind = %entry.kind, "audit entry written");
        Ok(())
    }

    /// Read all entries, oldest first
    pub fn read_all(&self) -> LedgerResult<Vec<AuditEntry>> {
        let Some(reader) = self.open_reader()? else {
            return Ok(Vec::new());
        };

        let mut entries = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line_num = index + 1;
            let line = line.map_err(|e| {
                LedgerError::Io(format!("Failed to read audit log line {}: {}", line_num, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry = serde_json::from_str(&line).map_err(|e| {
                LedgerError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num, e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent `count` entries, oldest first
    pub fn read_recent(&self, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Number of non-empty lines in the log
    pub fn entry_count(&self) -> LedgerResult<usize> {
        let Some(reader) = self.open_reader()? else {
            return Ok(0);
        };

        Ok(reader
            .lines()
            .map_while(Result::ok)
            .filter(|l| !l.trim().is_empty())
            .count())
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }

    fn open_reader(&self) -> LedgerResult<Option<BufReader<File>>> {
        if !self.log_path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.log_path)
            .map_err(|e| LedgerError::Io(format!("Failed to open audit log: {}", e)))?;
        Ok(Some(BufReader::new(file)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use crate::models::{Entry, ExpenseCategory, ExpenseRecord, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn expense(units: i64) -> Entry {
        ExpenseRecord::new(
            Money::from_units(units),
            ExpenseCategory::Housing,
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            "rent",
        )
        .into()
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();

        logger.log(&AuditEntry::create(0, &expense(900))).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].position, 0);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();

        for i in 0..10 {
            logger.log(&AuditEntry::create(i, &expense(1))).unwrap();
        }

        assert_eq!(logger.entry_count().unwrap(), 10);

        let recent = logger.read_recent(3).unwrap();
        let positions: Vec<usize> = recent.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![7, 8, 9]);
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();

        assert!(!logger.path().exists());
        assert_eq!(logger.entry_count().unwrap(), 0);
        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_mixed_operations() {
        let (logger, _temp) = create_test_logger();

        logger.log(&AuditEntry::create(0, &expense(900))).unwrap();
        logger
            .log(&AuditEntry::update(0, &expense(900), &expense(950)))
            .unwrap();
        logger.log(&AuditEntry::delete(0, &expense(950))).unwrap();

        let ops: Vec<Operation> = logger
            .read_all()
            .unwrap()
            .iter()
            .map(|e| e.operation)
            .collect();
        assert_eq!(
            ops,
            vec![Operation::Create, Operation::Update, Operation::Delete]
        );
    }

    #[test]
    fn test_survives_restart() {
        let (logger, temp) = create_test_logger();
        logger.log(&AuditEntry::create(0, &expense(1))).unwrap();

        let reopened = AuditLogger::new(temp.path().join("audit.log"));
        assert_eq!(reopened.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_corrupt_line_reports_line_number() {
        let (logger, _temp) = create_test_logger();
        logger.log(&AuditEntry::create(0, &expense(1))).unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(logger.path())
            .unwrap()
            .write_all(b"garbage\n")
            .unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}

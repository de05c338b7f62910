//! Audit entry data structures
//!
//! Defines the structure of audit log entries: what happened, to which
//! record, and the record's value before and after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::generate_diff;
use crate::models::{Entry, RecordKind};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Which sequence the record belongs to
    pub kind: RecordKind,

    /// 0-based position of the record at the time of the operation
    pub position: usize,

    /// Short description of the record, e.g. "Salary $1000.00 on 2024-01-01"
    pub summary: String,

    /// The record before the operation (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The record after the operation (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Entry for a record appended at `position`
    pub fn create(position: usize, record: &Entry) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            kind: record.kind(),
            position,
            summary: summarize(record),
            before: None,
            after: serde_json::to_value(record).ok(),
            diff_summary: None,
        }
    }

    /// Entry for a record replaced in place
    pub fn update(position: usize, before: &Entry, after: &Entry) -> Self {
        let before_json = serde_json::to_value(before).ok();
        let after_json = serde_json::to_value(after).ok();
        let diff_summary = match (&before_json, &after_json) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            kind: after.kind(),
            position,
            summary: summarize(after),
            before: before_json,
            after: after_json,
            diff_summary,
        }
    }

    /// Entry for a record removed from `position`
    pub fn delete(position: usize, record: &Entry) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            kind: record.kind(),
            position,
            summary: summarize(record),
            before: serde_json::to_value(record).ok(),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} #{} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.kind,
            self.position + 1,
            self.summary
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

fn summarize(record: &Entry) -> String {
    format!(
        "{} {} on {}",
        record.classification(),
        record.amount(),
        record.date()
    )
}

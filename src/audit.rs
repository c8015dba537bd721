//! Append-only audit trail for ledger mutations
//!
//! Every successful create or delete appends one JSON line to audit.log
//! and flushes immediately. The trail is observational: reading it back
//! powers the `history` command, but the ledger file never depends on it.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseId};

/// Types of operations recorded in the audit trail
///
/// There is no update operation: records are immutable once stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// An expense was created
    Create,
    /// An expense was deleted
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// One recorded mutation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// UTC wall-clock time of the mutation
    pub timestamp: DateTime<Utc>,

    /// Which mutation happened
    pub operation: Operation,

    /// Id of the affected expense
    pub expense_id: ExpenseId,

    /// Snapshot of the record as created, or as it stood before deletion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense: Option<Expense>,
}

impl AuditEntry {
    /// Entry for a newly created expense
    pub fn created(expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            expense_id: expense.id,
            expense: Some(expense.clone()),
        }
    }

    /// Entry for a deleted expense
    ///
    /// The snapshot is absent when the caller no longer had the record at
    /// hand when the deletion went through.
    pub fn deleted(id: ExpenseId, snapshot: Option<&Expense>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            expense_id: id,
            expense: snapshot.cloned(),
        }
    }

    /// One-line rendering for the history command
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} expense {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.expense_id
        );

        if let Some(expense) = &self.expense {
            output.push_str(&format!(" ({}, {})", expense.category, expense.amount));
        }

        output
    }
}

/// Appends entries to the audit log, one JSON object per line
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry and flush
    ///
    /// The entry is serialized before the log is opened, so a value that
    /// cannot serialize never touches the file.
    pub fn log(&self, entry: &AuditEntry) -> LedgerResult<()> {
        let line = serde_json::to_string(entry)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| LedgerError::Io(format!("Failed to open audit log: {}", e)))?;

        writeln!(file, "{}", line)?;
        file.flush()?;

        Ok(())
    }

    /// All entries, oldest first; a log that was never written reads as empty
    pub fn read_all(&self) -> LedgerResult<Vec<AuditEntry>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(LedgerError::Io(format!("Failed to open audit log: {}", e)))
            }
        };

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let entry = serde_json::from_str(&line).map_err(|e| {
                LedgerError::Json(format!("Bad audit entry on line {}: {}", index + 1, e))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// The most recent `count` entries, still oldest first
    pub fn read_recent(&self, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let keep_from = entries.len().saturating_sub(count);
        Ok(entries.split_off(keep_from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn logger_in_temp_dir() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    fn sample_expense(id: i64) -> Expense {
        Expense {
            id: ExpenseId::from_raw(id),
            amount: Money::from_cents(250),
            category: Category::Transport,
            description: "Bus ticket".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        }
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_created_entry_carries_snapshot() {
        let entry = AuditEntry::created(&sample_expense(1));
        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.expense_id, ExpenseId::from_raw(1));
        assert!(entry.expense.is_some());
    }

    #[test]
    fn test_deleted_entry_without_snapshot() {
        let entry = AuditEntry::deleted(ExpenseId::from_raw(9), None);
        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.expense.is_none());
    }

    #[test]
    fn test_logged_entry_reads_back() {
        let (logger, _temp) = logger_in_temp_dir();

        logger.log(&AuditEntry::created(&sample_expense(1))).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].expense_id, ExpenseId::from_raw(1));
    }

    #[test]
    fn test_entries_kept_in_order() {
        let (logger, _temp) = logger_in_temp_dir();

        for i in 1..=5 {
            logger.log(&AuditEntry::created(&sample_expense(i))).unwrap();
        }

        let entries = logger.read_all().unwrap();
        let ids: Vec<i64> = entries.iter().map(|e| e.expense_id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_recent_window_is_the_tail() {
        let (logger, _temp) = logger_in_temp_dir();

        for i in 1..=10 {
            logger.log(&AuditEntry::created(&sample_expense(i))).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].expense_id, ExpenseId::from_raw(8));
        assert_eq!(recent[2].expense_id, ExpenseId::from_raw(10));
    }

    #[test]
    fn test_unwritten_log_reads_empty() {
        let (logger, _temp) = logger_in_temp_dir();
        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_trail_survives_reopen() {
        let (logger, temp) = logger_in_temp_dir();

        let expense = sample_expense(1);
        logger.log(&AuditEntry::created(&expense)).unwrap();
        logger
            .log(&AuditEntry::deleted(expense.id, Some(&expense)))
            .unwrap();

        // A fresh logger over the same file sees both entries
        let reopened = AuditLogger::new(temp.path().join("audit.log"));
        let entries = reopened.read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].operation, Operation::Delete);
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::created(&sample_expense(3));
        let formatted = entry.format_human_readable();

        assert!(formatted.contains("CREATE"));
        assert!(formatted.contains("expense 3"));
        assert!(formatted.contains("TRANSPORT"));
        assert!(formatted.contains("$2.50"));
    }
}

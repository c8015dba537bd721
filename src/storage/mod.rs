//! Storage layer for the expense ledger
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit trail that records every mutation.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;
use crate::models::{Expense, ExpenseId};

/// Main storage coordinator: the expense repository plus the audit trail
pub struct Storage {
    paths: LedgerPaths,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Open storage rooted at the given paths, creating directories as needed
    pub fn new(paths: LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// The resolved path set this storage was opened with
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// The audit trail reader/writer
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a successful create in the audit trail
    pub fn log_create(&self, expense: &Expense) -> LedgerResult<()> {
        self.audit.log(&AuditEntry::created(expense))
    }

    /// Record a successful delete in the audit trail
    pub fn log_delete(&self, id: ExpenseId, snapshot: Option<&Expense>) -> LedgerResult<()> {
        self.audit.log(&AuditEntry::deleted(id, snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, NewExpense};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(storage.expenses.list().unwrap().is_empty());
    }

    #[test]
    fn test_mutations_feed_the_audit_trail() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let input = NewExpense::new(Money::from_cents(500), Category::Food);
        let expense = storage.expenses.create(input).unwrap();
        storage.log_create(&expense).unwrap();

        storage.expenses.delete_by_id(expense.id).unwrap();
        storage.log_delete(expense.id, Some(&expense)).unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
    }
}

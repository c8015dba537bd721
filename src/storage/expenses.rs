//! Expense repository for JSON storage
//!
//! Manages loading and saving expense records to expenses.json. The
//! repository holds no in-memory state: every operation is a fresh
//! read-modify-write round trip, so the durable file is the single source
//! of truth and a listing always reflects the latest mutation.

use std::path::PathBuf;

use chrono::Local;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, ExpenseId, NewExpense};

use super::file_io::{read_json, write_json_atomic};

/// Serializable ledger file structure
///
/// Carries the id counter alongside the records so identifiers survive
/// restarts and are never handed out twice.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct LedgerData {
    /// Next id to assign; monotonically increasing, never reset
    #[serde(default = "initial_next_id")]
    next_id: i64,
    #[serde(default)]
    expenses: Vec<Expense>,
}

fn initial_next_id() -> i64 {
    1
}

impl Default for LedgerData {
    fn default() -> Self {
        Self {
            next_id: initial_next_id(),
            expenses: Vec::new(),
        }
    }
}

impl LedgerData {
    /// Keep the counter strictly ahead of every stored id
    ///
    /// Guards against hand-edited files; a stale counter would otherwise
    /// hand out an id that is already taken. At the top of the id range
    /// the counter saturates instead of wrapping negative.
    fn normalize(mut self) -> Self {
        let max_id = self
            .expenses
            .iter()
            .map(|e| e.id.as_i64())
            .max()
            .unwrap_or(0);
        self.next_id = self.next_id.max(max_id.saturating_add(1));
        self
    }
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    /// Create a new expense repository backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Validate and persist a new expense, assigning its identifier
    ///
    /// A negative amount is rejected with a validation error before
    /// anything is written; the ledger file is not touched on failure.
    pub fn create(&self, input: NewExpense) -> LedgerResult<Expense> {
        if input.amount.is_negative() {
            return Err(LedgerError::Validation(
                "Expense amount cannot be negative".into(),
            ));
        }

        let mut data = self.load()?;
        let expense = Expense {
            id: ExpenseId::from_raw(data.next_id),
            amount: input.amount,
            category: input.category,
            description: input.description,
            date: input.date.unwrap_or_else(|| Local::now().date_naive()),
        };

        data.next_id = data.next_id.saturating_add(1);
        data.expenses.push(expense.clone());
        self.store(&data)?;

        Ok(expense)
    }

    /// Get all records, newest first (descending id)
    pub fn list(&self) -> LedgerResult<Vec<Expense>> {
        let mut expenses = self.load()?.expenses;
        expenses.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(expenses)
    }

    /// Remove the record with the given id
    ///
    /// Returns whether a record was actually removed. A miss is not an
    /// error and leaves the ledger file untouched.
    pub fn delete_by_id(&self, id: ExpenseId) -> LedgerResult<bool> {
        let mut data = self.load()?;
        let len_before = data.expenses.len();
        data.expenses.retain(|e| e.id != id);

        if data.expenses.len() == len_before {
            return Ok(false);
        }

        self.store(&data)?;
        Ok(true)
    }

    fn load(&self) -> LedgerResult<LedgerData> {
        Ok(read_json::<LedgerData, _>(&self.path)?.normalize())
    }

    fn store(&self, data: &LedgerData) -> LedgerResult<()> {
        write_json_atomic(&self.path, data)
    }
}

//! CLI commands for expenses (add, list, delete)
//!
//! Handlers parse user input at the boundary, call the repository, and
//! re-read the listing after every mutation so the output always reflects
//! the durable state.

use chrono::NaiveDate;

use crate::display::{format_expense_table, format_total_line};
use crate::error::LedgerResult;
use crate::models::{Category, ExpenseId, Money, NewExpense};
use crate::reports::total;
use crate::storage::Storage;

/// Handle the add command
pub fn handle_add(
    storage: &Storage,
    amount: &str,
    category: &str,
    description: Option<String>,
    date: Option<String>,
) -> LedgerResult<()> {
    let amount = Money::parse(amount).map_err(|e| {
        crate::error::LedgerError::Validation(format!("{}. Use a value like 12.50", e))
    })?;

    let category = category
        .parse::<Category>()
        .map_err(|e| crate::error::LedgerError::Validation(e.to_string()))?;

    let mut input = NewExpense::new(amount, category);
    if let Some(description) = description {
        input = input.with_description(description);
    }
    if let Some(raw) = date {
        let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
            crate::error::LedgerError::Validation(format!(
                "Invalid date format: {}. Use YYYY-MM-DD",
                raw
            ))
        })?;
        input = input.with_date(date);
    }

    let expense = storage.expenses.create(input)?;
    storage.log_create(&expense)?;

    println!("Expense added successfully (ID: {}).", expense.id);
    println!("{}", format_total_line(total(&storage.expenses.list()?)));

    Ok(())
}

/// Handle the list command
pub fn handle_list(storage: &Storage) -> LedgerResult<()> {
    let expenses = storage.expenses.list()?;

    print!("{}", format_expense_table(&expenses));
    println!("{}", format_total_line(total(&expenses)));

    Ok(())
}

/// Handle the delete command
///
/// A missing id is a normal outcome, not an error: the command reports it
/// and exits cleanly either way.
pub fn handle_delete(storage: &Storage, id: ExpenseId) -> LedgerResult<()> {
    // Snapshot for the audit trail before the record disappears
    let snapshot = storage.expenses.list()?.into_iter().find(|e| e.id == id);

    if storage.expenses.delete_by_id(id)? {
        storage.log_delete(id, snapshot.as_ref())?;
        println!("Expense ID {} deleted successfully.", id);
        println!("{}", format_total_line(total(&storage.expenses.list()?)));
    } else {
        println!("Expense ID {} not found.", id);
    }

    Ok(())
}

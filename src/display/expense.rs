//! Expense display formatting
//!
//! Formats expense listings for terminal output: a table of records plus
//! the running total footer shown after every listing.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Expense, Money};

/// One row of the expense listing table
#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id.as_i64(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: expense.category.label(),
            description: expense.description.clone(),
            amount: expense.amount.to_string(),
        }
    }
}

/// Format a list of expenses as a table
///
/// The caller provides the order; the store already lists newest first.
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses.iter().map(ExpenseRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());

    format!("{}\n", table)
}

/// Format the running total footer
pub fn format_total_line(total: Money) -> String {
    format!("Total Expenses: {}", total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ExpenseId};
    use chrono::NaiveDate;

    fn sample_expense(id: i64, cents: i64, description: &str) -> Expense {
        Expense {
            id: ExpenseId::from_raw(id),
            amount: Money::from_cents(cents),
            category: Category::Food,
            description: description.to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        }
    }

    #[test]
    fn test_format_empty_table() {
        let formatted = format_expense_table(&[]);
        assert!(formatted.contains("No expenses recorded"));
    }

    #[test]
    fn test_format_table_contains_rows() {
        let expenses = vec![
            sample_expense(2, 500, "Snacks"),
            sample_expense(1, 1000, "Groceries"),
        ];

        let formatted = format_expense_table(&expenses);
        assert!(formatted.contains("ID"));
        assert!(formatted.contains("Groceries"));
        assert!(formatted.contains("Snacks"));
        assert!(formatted.contains("$10.00"));
        assert!(formatted.contains("2026-03-14"));
    }

    #[test]
    fn test_format_table_preserves_order() {
        let expenses = vec![
            sample_expense(2, 500, "Newest"),
            sample_expense(1, 1000, "Oldest"),
        ];

        let formatted = format_expense_table(&expenses);
        let newest_pos = formatted.find("Newest").unwrap();
        let oldest_pos = formatted.find("Oldest").unwrap();
        assert!(newest_pos < oldest_pos);
    }

    #[test]
    fn test_format_total_line() {
        assert_eq!(
            format_total_line(Money::from_cents(1750)),
            "Total Expenses: $17.50"
        );
        assert_eq!(format_total_line(Money::zero()), "Total Expenses: $0.00");
    }
}

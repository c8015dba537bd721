//! Expense record model
//!
//! Records are immutable once stored: the ledger has an add path and a
//! delete path, but no edit path.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// One persisted ledger entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-assigned identifier
    pub id: ExpenseId,

    /// Amount spent; never negative once stored
    pub amount: Money,

    /// Catalog category
    pub category: Category,

    /// Free-text description, may be empty
    #[serde(default)]
    pub description: String,

    /// Calendar date of the expense (no time component)
    pub date: NaiveDate,
}

/// Input for creating a new expense
///
/// Deliberately has no id field: identifiers exist only after the store has
/// assigned one.
#[derive(Debug, Clone)]
pub struct NewExpense {
    /// Amount spent
    pub amount: Money,

    /// Catalog category
    pub category: Category,

    /// Free-text description
    pub description: String,

    /// Expense date; resolved to the local calendar date when absent
    pub date: Option<NaiveDate>,
}

impl NewExpense {
    /// Create an input with an empty description and today's date
    pub fn new(amount: Money, category: Category) -> Self {
        Self {
            amount,
            category,
            description: String::new(),
            date: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set an explicit expense date
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

impl fmt::Display for Expense {
    /// Single-line record layout, also used for the report's detailed section
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {:<4} | Date: {} | Amount: {:<10} | Category: {:<12} | Description: {}",
            self.id.as_i64(),
            self.date.format("%Y-%m-%d"),
            self.amount.plain(),
            self.category.label(),
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_expense() -> Expense {
        Expense {
            id: ExpenseId::from_raw(3),
            amount: Money::from_cents(250),
            category: Category::Transport,
            description: "Bus ticket".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        }
    }

    #[test]
    fn test_display_row_layout() {
        assert_eq!(
            format!("{}", sample_expense()),
            "ID: 3    | Date: 2026-03-14 | Amount: 2.50       | Category: TRANSPORT    | Description: Bus ticket"
        );
    }

    #[test]
    fn test_new_expense_defaults() {
        let input = NewExpense::new(Money::from_cents(1000), Category::Food);
        assert!(input.description.is_empty());
        assert!(input.date.is_none());
    }

    #[test]
    fn test_new_expense_builders() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let input = NewExpense::new(Money::from_cents(1000), Category::Food)
            .with_description("Lunch")
            .with_date(date);
        assert_eq!(input.description, "Lunch");
        assert_eq!(input.date, Some(date));
    }

    #[test]
    fn test_serialization_round_trip() {
        let expense = sample_expense();
        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"TRANSPORT\""));
        assert!(json.contains("\"2026-03-14\""));

        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, deserialized);
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let json = r#"{"id":1,"amount":1000,"category":"FOOD","date":"2026-01-02"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert!(expense.description.is_empty());
    }
}

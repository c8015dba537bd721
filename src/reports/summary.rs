//! Expense summary report
//!
//! Aggregates a record list into a grand total and per-category subtotals,
//! and renders the text report. Aggregation is pure: it reads the given
//! records and touches nothing else, so the same input always produces the
//! same numbers.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Category, Expense, Money};

/// Sum of all amounts; zero for an empty slice
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Per-category sums
///
/// Only categories present in the input appear as keys; a category nobody
/// spent in has no entry rather than a zero. Iteration order of the map is
/// unspecified, so callers that render must impose their own order.
pub fn category_totals(expenses: &[Expense]) -> HashMap<Category, Money> {
    let mut totals: HashMap<Category, Money> = HashMap::new();
    for expense in expenses {
        *totals.entry(expense.category).or_insert_with(Money::zero) += expense.amount;
    }
    totals
}

const SEPARATOR: &str = "----------------------------";

/// Expense summary report
///
/// Rendering is deterministic: the same records and generation date produce
/// byte-identical text. Category lines follow the catalog order from
/// [`Category::ALL`]; the detailed section keeps the input order.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// Date the report was generated
    pub generated_on: NaiveDate,
    /// Grand total across all records
    pub total: Money,
    /// Subtotal per category with at least one record
    pub by_category: HashMap<Category, Money>,
    /// The records themselves, in the order they were given
    pub expenses: Vec<Expense>,
}

impl SummaryReport {
    /// Aggregate the given records as of `generated_on`
    pub fn build(expenses: Vec<Expense>, generated_on: NaiveDate) -> Self {
        Self {
            generated_on,
            total: total(&expenses),
            by_category: category_totals(&expenses),
            expenses,
        }
    }

    /// Render the report text
    pub fn render(&self) -> String {
        let mut output = String::new();

        // Header
        output.push_str("--- Expense Summary Report ---\n");
        output.push_str(SEPARATOR);
        output.push('\n');
        output.push_str(&format!("Generated On: {}\n", self.generated_on));
        output.push_str(SEPARATOR);
        output.push_str("\n\n");

        // Grand total
        output.push_str(&format!("Total Expenses: {}\n\n", self.total));

        // Category breakdown in catalog order
        output.push_str("Expenses by Category:\n");
        if self.by_category.is_empty() {
            output.push_str("  No categorized expenses.\n");
        } else {
            for category in Category::ALL {
                if let Some(subtotal) = self.by_category.get(&category) {
                    output.push_str(&format!("  - {:<15}: {}\n", category.label(), subtotal));
                }
            }
        }
        output.push('\n');

        // Detailed listing
        output.push_str(SEPARATOR);
        output.push('\n');
        output.push_str("Detailed Expenses:\n");
        if self.expenses.is_empty() {
            output.push_str("  No detailed expenses.\n");
        } else {
            for expense in &self.expenses {
                output.push_str(&format!("  {}\n", expense));
            }
        }
        output.push_str(SEPARATOR);
        output.push('\n');

        output
    }
}

//! Core data models for the expense ledger
//!
//! This module contains the data structures that represent the domain:
//! expense records, the category catalog, money amounts and identifiers.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::{Category, UnknownCategory};
pub use expense::{Expense, NewExpense};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};

//! Display formatting for terminal output
//!
//! Presentation only: these helpers turn already-fetched data into strings
//! and never touch storage.

pub mod expense;

pub use expense::{format_expense_table, format_total_line};

//! Reports module for the expense ledger
//!
//! Provides the expense summary report: a grand total, per-category
//! subtotals and a detailed record listing, rendered as deterministic text.

pub mod summary;

pub use summary::{category_totals, total, SummaryReport};

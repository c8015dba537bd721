//! Expense Ledger - single-user expense tracking from the terminal
//!
//! This library provides the core functionality for the expense ledger CLI.
//! Records are held in a local JSON file that is the single source of truth:
//! every command reads it fresh, and every mutation is written through
//! before the command returns.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the data directory
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, money, ids)
//! - `storage`: JSON file storage layer with atomic writes
//! - `audit`: Append-only audit trail of mutations
//! - `reports`: Aggregation and the summary report
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::paths::LedgerPaths;
//! use expense_ledger::storage::Storage;
//!
//! let paths = LedgerPaths::new()?;
//! let storage = Storage::new(paths)?;
//! let expenses = storage.expenses.list()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult};

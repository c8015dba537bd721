//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the storage and report layers.

pub mod category;
pub mod expense;
pub mod history;
pub mod report;

pub use category::handle_categories;
pub use expense::{handle_add, handle_delete, handle_list};
pub use history::handle_history;
pub use report::handle_report;

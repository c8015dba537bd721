use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use expense_ledger::cli::{
    handle_add, handle_categories, handle_delete, handle_history, handle_list, handle_report,
};
use expense_ledger::config::paths::LedgerPaths;
use expense_ledger::models::ExpenseId;
use expense_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Single-user expense ledger with category summary reports",
    long_about = "A single-user expense ledger for the terminal. Records live in a \
                  local JSON file; every mutation is durable before the command \
                  returns, and listings and reports always reflect the stored state."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g., "12.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category label (see 'expense categories')
        #[arg(short, long)]
        category: String,
        /// Free-text description
        #[arg(short, long)]
        description: Option<String>,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List all expenses, newest first
    #[command(alias = "ls")]
    List,

    /// Delete an expense by its id
    #[command(alias = "rm")]
    Delete {
        /// Expense id as shown by 'expense list'
        id: ExpenseId,
    },

    /// Show the expense summary report
    Report {
        /// Export the report text to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the valid expense categories
    Categories,

    /// Show recent ledger history from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show where the ledger stores its data
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and storage
    let paths = LedgerPaths::new()?;
    let storage = Storage::new(paths)?;

    match cli.command {
        Some(Commands::Add {
            amount,
            category,
            description,
            date,
        }) => {
            handle_add(&storage, &amount, &category, description, date)?;
        }
        Some(Commands::List) => {
            handle_list(&storage)?;
        }
        Some(Commands::Delete { id }) => {
            handle_delete(&storage, id)?;
        }
        Some(Commands::Report { output }) => {
            handle_report(&storage, output)?;
        }
        Some(Commands::Categories) => {
            handle_categories()?;
        }
        Some(Commands::History { limit }) => {
            handle_history(&storage, limit)?;
        }
        Some(Commands::Config) => {
            let paths = storage.paths();
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.expenses_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
        }
        None => {
            println!("Expense Ledger - track spending from the terminal");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense add <amount> --category <name>' to record an expense.");
        }
    }

    Ok(())
}

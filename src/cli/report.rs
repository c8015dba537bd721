//! CLI command for the summary report
//!
//! Renders the expense summary report to stdout, or exports the identical
//! text to a file when an output path is given.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

use crate::error::LedgerResult;
use crate::reports::SummaryReport;
use crate::storage::Storage;

/// Handle the report command
pub fn handle_report(storage: &Storage, output: Option<PathBuf>) -> LedgerResult<()> {
    let expenses = storage.expenses.list()?;
    let report = SummaryReport::build(expenses, Local::now().date_naive());
    let text = report.render();

    if let Some(path) = output {
        let mut file = File::create(&path).map_err(|e| {
            crate::error::LedgerError::Export(format!(
                "Failed to create file {}: {}",
                path.display(),
                e
            ))
        })?;
        file.write_all(text.as_bytes()).map_err(|e| {
            crate::error::LedgerError::Export(format!(
                "Failed to write file {}: {}",
                path.display(),
                e
            ))
        })?;
        println!("Summary report exported to: {}", path.display());
    } else {
        print!("{}", text);
    }

    Ok(())
}

//! CLI command for ledger history
//!
//! Shows recent entries from the append-only audit trail.

use crate::error::LedgerResult;
use crate::storage::Storage;

/// Handle the history command
pub fn handle_history(storage: &Storage, limit: usize) -> LedgerResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No ledger history recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}

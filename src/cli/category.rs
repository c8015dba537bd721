//! CLI command for the category catalog

use crate::error::LedgerResult;
use crate::models::Category;

/// Handle the categories command: print the catalog in canonical order
pub fn handle_categories() -> LedgerResult<()> {
    for category in Category::ALL {
        println!("{}", category);
    }
    Ok(())
}

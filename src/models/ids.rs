//! Strongly-typed identifier for ledger records
//!
//! The newtype keeps raw integers out of the public API and documents where
//! identifiers come from: the store assigns them, callers never invent them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier assigned to an expense by the store at creation time
///
/// Ids increase monotonically and are never reused, even after the record
/// they pointed at has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    /// Wrap a raw id value
    pub const fn from_raw(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying integer value
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

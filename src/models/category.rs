//! Expense category catalog
//!
//! The catalog is a fixed, ordered set of eight categories. Every stored
//! record references exactly one entry; there is no user-defined category
//! management. [`Category::ALL`] defines the canonical order used wherever
//! categories are enumerated, so listings and reports never depend on hash
//! map iteration order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A spending category from the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Housing,
    Health,
    Education,
    Other,
}

impl Category {
    /// Every catalog entry in canonical order
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Utilities,
        Category::Entertainment,
        Category::Housing,
        Category::Health,
        Category::Education,
        Category::Other,
    ];

    /// The catalog label for this category
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Food => "FOOD",
            Category::Transport => "TRANSPORT",
            Category::Utilities => "UTILITIES",
            Category::Entertainment => "ENTERTAINMENT",
            Category::Housing => "HOUSING",
            Category::Health => "HEALTH",
            Category::Education => "EDUCATION",
            Category::Other => "OTHER",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Case-insensitive lookup against the catalog labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(wanted.to_string()))
    }
}

/// Error for a label that is not part of the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        write!(
            f,
            "Unknown category '{}' (expected one of: {})",
            self.0,
            labels.join(", ")
        )
    }
}

impl std::error::Error for UnknownCategory {}

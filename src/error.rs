//! Error types for the expense ledger
//!
//! One crate-wide enum covers every failure the application reports. The
//! split that matters to callers is validation (user-correctable) versus
//! everything else (environment); `is_validation` exposes it.

use thiserror::Error;

/// The error type for all ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors (unresolvable data directory)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O failures outside the ledger file itself
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON encode/decode failures
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user-supplied values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Durable store failures (unreadable or unwritable ledger file)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Check if this is a validation error
    ///
    /// Validation failures are user-correctable; everything else points at
    /// the environment.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

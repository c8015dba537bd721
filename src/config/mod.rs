//! Configuration module for the expense ledger
//!
//! Provides XDG-compliant path resolution for the data directory. The
//! ledger itself has no settings file; the data directory is the only
//! configurable location.

pub mod paths;

pub use paths::LedgerPaths;

//! Error types for the ledger facade.

use civic_ledger_core::CoreError;
use civic_ledger_perms::PermsError;
use civic_ledger_store::StoreError;
use thiserror::Error;

/// Errors that can occur around the registries: configuration, snapshots,
/// and permission failures bubbled up through `?`.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Permission error.
    #[error("permission error: {0}")]
    Permission(#[from] PermsError),

    /// Snapshot encoding error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Malformed configuration document.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Malformed principal.
    #[error("core error: {0}")]
    Core(#[from] CoreError),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

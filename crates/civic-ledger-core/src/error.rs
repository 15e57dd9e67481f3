//! Error types for the Civic Ledger core.

use thiserror::Error;

/// Errors that can occur while parsing core primitives.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid principal hex: {0}")]
    InvalidPrincipalHex(#[from] hex::FromHexError),

    #[error("invalid principal length: expected 32 bytes, got {0}")]
    InvalidPrincipalLength(usize),
}

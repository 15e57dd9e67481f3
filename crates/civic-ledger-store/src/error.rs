//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Record reads and writes are infallible; only snapshot encoding and
/// restore can fail.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Snapshot could not be encoded.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Snapshot bytes could not be decoded.
    #[error("decoding error: {0}")]
    Decoding(String),

    /// Snapshot entries are not in strictly increasing key order.
    #[error("non-canonical snapshot: entry {index} repeats or precedes the previous key")]
    NonCanonical { index: usize },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

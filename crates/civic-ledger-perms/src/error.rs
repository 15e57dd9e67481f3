//! Error types for the permissions module.

use thiserror::Error;

/// Numeric code reported to callers for [`PermsError::NotAuthorized`].
pub const ERR_NOT_AUTHORIZED: u32 = 100;

/// Errors that can occur during permission operations.
///
/// A missing record is never an error: reads degrade to `false` and revoking
/// an absent key succeeds without effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PermsError {
    /// The caller failed the registry's authorization predicate.
    #[error("not authorized")]
    NotAuthorized,
}

impl PermsError {
    /// The numeric code surfaced on the mutation interface.
    pub const fn code(&self) -> u32 {
        match self {
            PermsError::NotAuthorized => ERR_NOT_AUTHORIZED,
        }
    }
}

/// Result type for permission operations.
pub type Result<T> = std::result::Result<T, PermsError>;

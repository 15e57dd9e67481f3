//! Principals: the ledger identities that invoke registry operations.
//!
//! A principal is opaque. The registries only ever compare principals for
//! equality; how the host ledger authenticates them is not our concern.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Domain separator for [`Principal::derive`].
const DERIVE_DOMAIN: &[u8] = b"civic-ledger-principal-v0:";

/// A 32-byte ledger principal.
///
/// Serializes as a lowercase hex string so it reads well in configuration.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Principal(pub [u8; 32]);

impl Principal {
    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derive a principal from an external address string.
    ///
    /// Blake3 over a domain-separated label, so the same host address always
    /// maps to the same principal.
    pub fn derive(address: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(DERIVE_DOMAIN);
        hasher.update(address.as_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex string.
    pub fn from_hex(s: &str) -> Result<Self, CoreError> {
        let bytes = hex::decode(s)?;
        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| CoreError::InvalidPrincipalLength(bytes.len()))?;
        Ok(Self(arr))
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.to_hex()[..16])
    }
}

impl AsRef<[u8]> for Principal {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Principal {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<String> for Principal {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Principal> for String {
    fn from(principal: Principal) -> Self {
        principal.to_hex()
    }
}

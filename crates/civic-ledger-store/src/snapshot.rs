//! Point-in-time snapshots of a record store.
//!
//! A snapshot is the full list of `(key, record)` pairs sorted by key. Its
//! CBOR encoding is deterministic, so two nodes holding the same records
//! compute the same [`StateDigest`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, StoreError};
use crate::traits::RecordStore;

/// A 32-byte Blake3 digest of a snapshot's CBOR encoding.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateDigest(pub [u8; 32]);

impl StateDigest {
    /// Compute the digest of the given bytes.
    pub fn hash(data: &[u8]) -> Self {
        Self(*blake3::hash(data).as_bytes())
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for StateDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateDigest({})", &self.to_hex()[..16])
    }
}

/// All records of one store, sorted by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<K, V> {
    /// The `(key, record)` pairs.
    pub entries: Vec<(K, V)>,
}

impl<K: Ord + Clone, V: Clone> Snapshot<K, V> {
    /// Capture every record held by `store`.
    ///
    /// Entries are sorted regardless of the backend's iteration order.
    pub fn capture<S: RecordStore<K, V>>(store: &S) -> Self {
        let mut entries: Vec<(K, V)> = store
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { entries }
    }
}

impl<K, V> Snapshot<K, V> {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Serialize, V: Serialize> Snapshot<K, V> {
    /// Serialize to CBOR bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(self, &mut buf).map_err(|e| StoreError::Encoding(e.to_string()))?;
        Ok(buf)
    }

    /// Blake3 digest of the CBOR encoding.
    pub fn digest(&self) -> Result<StateDigest> {
        Ok(StateDigest::hash(&self.to_bytes()?))
    }
}

impl<K: DeserializeOwned, V: DeserializeOwned> Snapshot<K, V> {
    /// Deserialize from CBOR bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        ciborium::from_reader(bytes).map_err(|e| StoreError::Decoding(e.to_string()))
    }
}

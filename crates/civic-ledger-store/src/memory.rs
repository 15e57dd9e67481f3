//! In-memory implementation of the RecordStore trait.
//!
//! Backed by an ordered map so iteration, and therefore snapshots, are
//! deterministic across nodes.

use std::collections::btree_map::{BTreeMap, Range};
use std::ops::RangeBounds;

use crate::error::{Result, StoreError};
use crate::snapshot::Snapshot;
use crate::traits::RecordStore;

/// In-memory record store.
///
/// All data is lost when the store is dropped unless a [`Snapshot`] is taken.
#[derive(Debug, Clone)]
pub struct MemoryStore<K, V> {
    records: BTreeMap<K, V>,
}

impl<K: Ord, V> MemoryStore<K, V> {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Rebuild a store from a snapshot.
    ///
    /// Entries must be in strictly increasing key order, as
    /// [`Snapshot::capture`] produces them. A repeated or out-of-order key is
    /// rejected rather than collapsed.
    pub fn from_snapshot(snapshot: Snapshot<K, V>) -> Result<Self> {
        if let Some(index) = snapshot
            .entries
            .windows(2)
            .position(|pair| pair[0].0 >= pair[1].0)
        {
            return Err(StoreError::NonCanonical { index: index + 1 });
        }

        Ok(Self {
            records: snapshot.entries.into_iter().collect(),
        })
    }

    /// Iterate over the records whose keys fall in `range`, in key order.
    ///
    /// Panics if the range starts after it ends.
    pub fn range<R>(&self, range: R) -> Range<'_, K, V>
    where
        R: RangeBounds<K>,
    {
        self.records.range::<K, R>(range)
    }
}

impl<K: Ord, V> Default for MemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> RecordStore<K, V> for MemoryStore<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        self.records.get(key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.records.get_mut(key)
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.records.insert(key, value)
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)> + 'a
    where
        K: 'a,
        V: 'a,
    {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civic_ledger_core::{CitizenId, CredentialType};

    type Key = (CitizenId, CredentialType);

    #[test]
    fn test_memory_store_basic() {
        let mut store: MemoryStore<Key, u64> = MemoryStore::new();
        let key = (CitizenId::new("CITIZEN123456789"), CredentialType::ID);

        assert!(store.is_empty());
        assert_eq!(store.put(key.clone(), 100), None);
        assert_eq!(store.get(&key), Some(&100));
        assert!(store.contains(&key));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_put_replaces() {
        let mut store: MemoryStore<Key, u64> = MemoryStore::new();
        let key = (CitizenId::new("C1"), CredentialType::ID);

        store.put(key.clone(), 1);
        assert_eq!(store.put(key.clone(), 2), Some(1));
        assert_eq!(store.get(&key), Some(&2));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_in_place_mutation() {
        let mut store: MemoryStore<Key, u64> = MemoryStore::new();
        let key = (CitizenId::new("C1"), CredentialType::ID);
        store.put(key.clone(), 1);

        if let Some(v) = store.get_mut(&key) {
            *v = 7;
        }
        assert_eq!(store.get(&key), Some(&7));

        let missing = (CitizenId::new("C2"), CredentialType::ID);
        assert!(store.get_mut(&missing).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_range() {
        let mut store: MemoryStore<Key, u64> = MemoryStore::new();
        store.put((CitizenId::new("A"), CredentialType::new(u32::MAX)), 0);
        store.put((CitizenId::new("B"), CredentialType::new(0)), 1);
        store.put((CitizenId::new("B"), CredentialType::new(u32::MAX)), 2);
        store.put((CitizenId::new("C"), CredentialType::new(0)), 3);

        let b = CitizenId::new("B");
        let values: Vec<u64> = store
            .range((b.clone(), CredentialType::new(0))..=(b, CredentialType::new(u32::MAX)))
            .map(|(_, v)| *v)
            .collect();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_from_snapshot_rejects_repeated_key() {
        let key = (CitizenId::new("C1"), CredentialType::ID);
        let snapshot = Snapshot {
            entries: vec![(key.clone(), 1u64), (key, 2u64)],
        };

        assert!(matches!(
            MemoryStore::from_snapshot(snapshot),
            Err(StoreError::NonCanonical { index: 1 })
        ));
    }

    #[test]
    fn test_from_snapshot_rejects_unsorted_entries() {
        let snapshot = Snapshot {
            entries: vec![
                ((CitizenId::new("C1"), CredentialType::ID), 1u64),
                ((CitizenId::new("C3"), CredentialType::ID), 3u64),
                ((CitizenId::new("C2"), CredentialType::ID), 2u64),
            ],
        };

        assert!(matches!(
            MemoryStore::from_snapshot(snapshot),
            Err(StoreError::NonCanonical { index: 2 })
        ));
    }

    #[test]
    fn test_iter_through_generic_store() {
        fn keys<K: Clone, V, S: RecordStore<K, V>>(store: &S) -> Vec<K> {
            store.iter().map(|(k, _)| k.clone()).collect()
        }

        let mut store: MemoryStore<Key, u64> = MemoryStore::new();
        store.put((CitizenId::new("B"), CredentialType::ID), 2);
        store.put((CitizenId::new("A"), CredentialType::ID), 1);

        assert_eq!(
            keys(&store),
            vec![
                (CitizenId::new("A"), CredentialType::ID),
                (CitizenId::new("B"), CredentialType::ID),
            ]
        );
    }

    #[test]
    fn test_memory_store_iterates_in_key_order() {
        let mut store: MemoryStore<Key, u64> = MemoryStore::new();
        store.put((CitizenId::new("B"), CredentialType::ID), 2);
        store.put((CitizenId::new("A"), CredentialType::DRIVER_LICENSE), 1);
        store.put((CitizenId::new("A"), CredentialType::ID), 0);

        let values: Vec<u64> = store.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![0, 1, 2]);
    }
}
